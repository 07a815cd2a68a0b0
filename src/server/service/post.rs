//! Board post service.
//!
//! Posting is gated by the board's `write_role`; editing and deleting by authorship
//! (or an admin role). Deleted posts stay in the table and disappear from every read.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::{
            board::{post::PostRepository, BoardRepository},
            user::UserRepository,
        },
        error::{auth::AuthError, AppError},
        middleware::auth::Permission,
        model::{
            board::{CreatePostParams, PaginatedPosts, Post, PostDetail, PostSummary, UpdatePostParams},
            user::User,
        },
        util::validate::require_length,
    },
};

const MAX_TITLE_LENGTH: usize = 100;
const MAX_CONTENT_LENGTH: usize = 10000;

pub struct PostService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists live posts of a board, newest first, with comment counts.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The board does not exist
    pub async fn list(
        &self,
        board_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedPosts, AppError> {
        if BoardRepository::new(self.db)
            .find_by_id(board_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Board not found".to_string()));
        }

        let repo = PostRepository::new(self.db);
        let (posts, total, total_pages) =
            repo.get_by_board_paginated(board_id, page, per_page).await?;

        let post_ids: Vec<i32> = posts.iter().map(|p| p.id).collect();
        let counts = repo.comment_counts(&post_ids).await?;
        let author_ids: Vec<i32> = posts.iter().map(|p| p.author_id).collect();
        let names = UserRepository::new(self.db)
            .get_display_names(&author_ids)
            .await?;

        let posts = posts
            .into_iter()
            .map(|post| PostSummary {
                comment_count: counts.get(&post.id).copied().unwrap_or(0),
                post,
            })
            .collect();

        Ok(PaginatedPosts {
            posts,
            names,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets a post and counts the view.
    pub async fn get(&self, id: i32) -> Result<PostDetail, AppError> {
        let repo = PostRepository::new(self.db);
        if repo.find_by_id(id).await?.is_none() {
            return Err(not_found());
        }
        repo.increment_views(id).await?;

        let post = repo.find_by_id(id).await?.ok_or_else(not_found)?;
        self.detail(post).await
    }

    /// Creates a post on a board the author may write to.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The board does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - The author's role is below the board's
    ///   `write_role`
    /// - `Err(AppError::BadRequest)` - Invalid title or content
    pub async fn create(&self, author: &User, params: CreatePostParams) -> Result<PostDetail, AppError> {
        let board = BoardRepository::new(self.db)
            .find_by_id(params.board_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Board not found".to_string()))?;

        let required = board.write_role.max(Role::User);
        if author.role < required {
            return Err(AuthError::AccessDenied(
                author.id,
                format!(
                    "Board '{}' requires role {} to post",
                    board.slug,
                    required.as_str()
                ),
            )
            .into());
        }

        require_length("Title", &params.title, 1, MAX_TITLE_LENGTH)?;
        require_length("Content", &params.content, 1, MAX_CONTENT_LENGTH)?;

        let post = PostRepository::new(self.db)
            .create(CreatePostParams {
                author_id: author.id,
                ..params
            })
            .await?;

        self.detail(post).await
    }

    /// Edits a post. Only the author or an admin may edit.
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        params: UpdatePostParams,
    ) -> Result<PostDetail, AppError> {
        let repo = PostRepository::new(self.db);
        let post = repo.find_by_id(id).await?.ok_or_else(not_found)?;
        Permission::Owner(post.author_id).check(actor)?;

        if let Some(title) = &params.title {
            require_length("Title", title, 1, MAX_TITLE_LENGTH)?;
        }
        if let Some(content) = &params.content {
            require_length("Content", content, 1, MAX_CONTENT_LENGTH)?;
        }

        repo.update(id, params).await?;

        let post = repo.find_by_id(id).await?.ok_or_else(not_found)?;
        self.detail(post).await
    }

    /// Soft-deletes a post. Only the author or an admin may delete.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let repo = PostRepository::new(self.db);
        let post = repo.find_by_id(id).await?.ok_or_else(not_found)?;
        Permission::Owner(post.author_id).check(actor)?;

        repo.soft_delete(id, Utc::now()).await?;

        if post.author_id != actor.id {
            tracing::info!("User {} deleted post {} of user {}", actor.id, id, post.author_id);
        }

        Ok(())
    }

    async fn detail(&self, post: Post) -> Result<PostDetail, AppError> {
        let names = UserRepository::new(self.db)
            .get_display_names(&[post.author_id])
            .await?;

        Ok(PostDetail { post, names })
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Post not found".to_string())
}

#[cfg(test)]
mod test;
