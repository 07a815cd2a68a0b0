//! Community channels, boards, posts and comments.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        board::{
            BoardDto, ChannelDto, CommentDto, CreateBoardDto, CreateChannelDto, CreatePostDto,
            PaginatedPostsDto, PostDto, PostListItemDto, UpdatePostDto,
        },
        user::Role,
    },
    server::{error::AppError, model::user::{parse_role, DisplayNames}},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub boards: Vec<Board>,
}

impl Channel {
    pub fn from_entity(entity: entity::channel::Model, boards: Vec<Board>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            description: entity.description,
            boards,
        }
    }

    pub fn into_dto(self) -> ChannelDto {
        ChannelDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            boards: self.boards.into_iter().map(|b| b.into_dto()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub id: i32,
    pub channel_id: i32,
    pub name: String,
    pub slug: String,
    /// Minimum role needed to create posts.
    pub write_role: Role,
}

impl Board {
    pub fn from_entity(entity: entity::board::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            channel_id: entity.channel_id,
            name: entity.name,
            slug: entity.slug,
            write_role: parse_role(&entity.write_role)?,
        })
    }

    pub fn into_dto(self) -> BoardDto {
        BoardDto {
            id: self.id,
            channel_id: self.channel_id,
            name: self.name,
            slug: self.slug,
            write_role: self.write_role,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub board_id: i32,
    pub author_id: i32,
    pub title: String,
    pub content: String,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn from_entity(entity: entity::post::Model) -> Self {
        Self {
            id: entity.id,
            board_id: entity.board_id,
            author_id: entity.author_id,
            title: entity.title,
            content: entity.content,
            view_count: entity.view_count,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self, names: &DisplayNames) -> PostDto {
        PostDto {
            id: self.id,
            board_id: self.board_id,
            title: self.title,
            content: self.content,
            author_id: self.author_id,
            author_name: names.get(self.author_id),
            view_count: self.view_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A post with its author's display name resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDetail {
    pub post: Post,
    pub names: DisplayNames,
}

impl PostDetail {
    pub fn into_dto(self) -> PostDto {
        self.post.into_dto(&self.names)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    pub post: Post,
    pub comment_count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPosts {
    pub posts: Vec<PostSummary>,
    pub names: DisplayNames,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedPosts {
    pub fn into_dto(self) -> PaginatedPostsDto {
        let names = self.names;

        PaginatedPostsDto {
            posts: self
                .posts
                .into_iter()
                .map(|summary| PostListItemDto {
                    id: summary.post.id,
                    board_id: summary.post.board_id,
                    title: summary.post.title,
                    author_id: summary.post.author_id,
                    author_name: names.get(summary.post.author_id),
                    view_count: summary.post.view_count,
                    comment_count: summary.comment_count,
                    created_at: summary.post.created_at,
                })
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub author_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            author_id: entity.author_id,
            content: entity.content,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self, names: &DisplayNames) -> CommentDto {
        CommentDto {
            id: self.id,
            post_id: self.post_id,
            author_id: self.author_id,
            author_name: names.get(self.author_id),
            content: self.content,
            created_at: self.created_at,
        }
    }
}

/// Comments of one post, oldest first, with author names.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentThread {
    pub comments: Vec<Comment>,
    pub names: DisplayNames,
}

impl CommentThread {
    pub fn into_dto(self) -> Vec<CommentDto> {
        let names = self.names;
        self.comments.into_iter().map(|c| c.into_dto(&names)).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateChannelParams {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl CreateChannelParams {
    pub fn from_dto(dto: CreateChannelDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            slug: dto.slug.trim().to_string(),
            description: dto
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateBoardParams {
    pub channel_id: i32,
    pub name: String,
    pub slug: String,
    pub write_role: Role,
}

impl CreateBoardParams {
    pub fn from_dto(channel_id: i32, dto: CreateBoardDto) -> Self {
        Self {
            channel_id,
            name: dto.name.trim().to_string(),
            slug: dto.slug.trim().to_string(),
            write_role: dto.write_role.unwrap_or(Role::User),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePostParams {
    pub board_id: i32,
    pub author_id: i32,
    pub title: String,
    pub content: String,
}

impl CreatePostParams {
    pub fn from_dto(board_id: i32, author_id: i32, dto: CreatePostDto) -> Self {
        Self {
            board_id,
            author_id,
            title: dto.title.trim().to_string(),
            content: dto.content,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePostParams {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdatePostParams {
    pub fn from_dto(dto: UpdatePostDto) -> Self {
        Self {
            title: dto.title.map(|t| t.trim().to_string()),
            content: dto.content,
        }
    }
}
