use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, UserProfile};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(UserProfile)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Whether to back the database with a temp file instead of memory.
    file_backed: bool,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            file_backed: false,
        }
    }

    /// Stores the database in a temp file so concurrent transactions really contend.
    pub fn file_backed(mut self) -> Self {
        self.file_backed = true;
        self
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and profile tables.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User).with_table(UserProfile)
    }

    /// Adds the notification tables on top of the user tables.
    ///
    /// Covers: User, UserProfile, Notification, NotificationReceipt, NotificationSetting
    pub fn with_notification_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Notification)
            .with_table(NotificationReceipt)
            .with_table(NotificationSetting)
    }

    /// Adds every table required by game post operations.
    ///
    /// Game post operations dispatch notifications, so the notification tables are
    /// included as well.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_game_post_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_game_post_tables(self) -> Self {
        self.with_notification_tables()
            .with_table(Game)
            .with_table(GamePost)
            .with_table(GameParticipant)
            .with_table(WaitingParticipant)
    }

    /// Adds channel, board, post and comment tables plus their dependencies.
    pub fn with_board_tables(self) -> Self {
        self.with_notification_tables()
            .with_table(Channel)
            .with_table(Board)
            .with_table(Post)
            .with_table(Comment)
    }

    /// Adds the notice table plus its dependencies.
    pub fn with_notice_tables(self) -> Self {
        self.with_notification_tables().with_table(Notice)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = if self.file_backed {
            TestContext::file_backed()
        } else {
            TestContext::new()
        };

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
