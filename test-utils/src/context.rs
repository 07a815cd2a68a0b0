use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::{path::PathBuf, sync::Arc};
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Isolated environment for a single test.
///
/// Both the database and the session are created on first access and live as long as the
/// context. The session store shares the SQLite pool with the database.
#[derive(Default)]
pub struct TestContext {
    /// Connection to the SQLite database, once opened.
    pub db: Option<DatabaseConnection>,

    /// Session backed by the same database, once created.
    pub session: Option<Session>,

    /// Backing file when the database lives on disk; removed on drop.
    file: Option<PathBuf>,
}

impl TestContext {
    /// Creates an empty in-memory context; nothing is connected until first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context whose database is a fresh file in the temp directory.
    ///
    /// An in-memory database is a single pooled connection, so transactions can never
    /// overlap. A file lets several connections contend for the write lock.
    pub fn file_backed() -> Self {
        let file = std::env::temp_dir().join(format!(
            "gamemate-test-{}-{}.db",
            std::process::id(),
            crate::factory::helpers::next_id()
        ));

        Self {
            db: None,
            session: None,
            file: Some(file),
        }
    }

    /// Returns the database connection, opening it on first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to the database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let url = match &self.file {
                Some(file) => format!("sqlite://{}?mode=rwc", file.display()),
                None => "sqlite::memory:".to_string(),
            };
            let db = Database::connect(url).await?;
            self.db = Some(db);
        }

        match self.db {
            Some(ref db) => Ok(db),
            None => unreachable!("database was initialized above"),
        }
    }

    /// Executes the given CREATE TABLE statements in order.
    ///
    /// # Arguments
    /// - `stmts` - Statements generated by `TestBuilder::with_table`
    ///
    /// # Returns
    /// - `Ok(())` - All tables created
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the session, creating the session table and a fresh session on first call.
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestContext::new();
    /// let session = test.session().await?;
    /// session.insert("auth:user", 1).await?;
    /// ```
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let db = self.database().await?;

            let pool = db.get_sqlite_connection_pool();
            let session_store = SqliteStore::new(pool.clone());

            session_store
                .migrate()
                .await
                .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

            let session = Session::new(
                None,
                Arc::new(session_store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            );

            self.session = Some(session);
        }

        match self.session {
            Some(ref session) => Ok(session),
            None => unreachable!("session was initialized above"),
        }
    }

    /// Returns both the database and the session, initializing whichever is missing.
    ///
    /// Avoids holding two mutable borrows when a test needs both.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (&self.db, &self.session) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => unreachable!("database and session were initialized above"),
        }
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(file) = &self.file {
            for suffix in ["", "-wal", "-shm"] {
                let mut path = file.clone().into_os_string();
                path.push(suffix);
                let _ = std::fs::remove_file(path);
            }
        }
    }
}
