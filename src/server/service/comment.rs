use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::notification::NotificationCategory,
    server::{
        data::{
            board::{comment::CommentRepository, post::PostRepository},
            user::UserRepository,
        },
        error::AppError,
        middleware::auth::Permission,
        model::{
            board::{Comment, CommentThread},
            notification::DispatchNotificationParams,
            user::User,
        },
        service::notification::NotificationService,
        util::validate::require_length,
    },
};

const MAX_CONTENT_LENGTH: usize = 1000;

pub struct CommentService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Live comments of a post, oldest first.
    pub async fn list(&self, post_id: i32) -> Result<CommentThread, AppError> {
        if PostRepository::new(self.db)
            .find_by_id(post_id)
            .await?
            .is_none()
        {
            return Err(post_not_found());
        }

        let comments = CommentRepository::new(self.db).get_by_post(post_id).await?;
        let mut author_ids: Vec<i32> = comments.iter().map(|c| c.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();
        let names = UserRepository::new(self.db)
            .get_display_names(&author_ids)
            .await?;

        Ok(CommentThread { comments, names })
    }

    /// Adds a comment and notifies the post author, unless they wrote it.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The new comment
    /// - `Err(AppError::NotFound)` - The post does not exist or was deleted
    /// - `Err(AppError::BadRequest)` - Empty or overlong content
    pub async fn create(
        &self,
        author: &User,
        post_id: i32,
        content: String,
    ) -> Result<Comment, AppError> {
        let content = content.trim().to_string();
        require_length("Comment", &content, 1, MAX_CONTENT_LENGTH)?;

        let txn = self.db.begin().await?;

        let post = PostRepository::new(&txn)
            .find_by_id(post_id)
            .await?
            .ok_or_else(post_not_found)?;

        let comment = CommentRepository::new(&txn)
            .create(post.id, author.id, content)
            .await?;

        if post.author_id != author.id {
            let name = UserRepository::new(&txn)
                .get_display_names(&[author.id])
                .await?
                .get(author.id);

            NotificationService::new(&txn)
                .dispatch(DispatchNotificationParams {
                    category: NotificationCategory::Comment,
                    title: "New comment".to_string(),
                    body: format!("{} commented on \"{}\"", name, post.title),
                    link: Some(format!("/posts/{}", post.id)),
                    recipients: vec![post.author_id],
                })
                .await?;
        }

        txn.commit().await?;

        Ok(comment)
    }

    /// Soft-deletes a comment. Only the author or an admin may delete.
    pub async fn delete(&self, actor: &User, comment_id: i32) -> Result<(), AppError> {
        let repo = CommentRepository::new(self.db);
        let comment = repo
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;
        Permission::Owner(comment.author_id).check(actor)?;

        repo.soft_delete(comment.id, Utc::now()).await?;

        Ok(())
    }
}

fn post_not_found() -> AppError {
    AppError::NotFound("Post not found".to_string())
}

#[cfg(test)]
mod test;
