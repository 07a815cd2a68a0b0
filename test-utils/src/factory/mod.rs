//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` convenience
//! function for quick default creation. Factories insert rows directly and leave
//! business rules to the code under test, with one exception: `GamePostFactory` also
//! inserts the author as leader, because a game post without a leader is not a state
//! the application ever produces.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let (author, game, post) = factory::helpers::create_game_post_with_dependencies(&db).await?;
//!
//! let admin = factory::user::UserFactory::new(&db)
//!     .role("ADMIN")
//!     .build()
//!     .await?;
//! ```

pub mod board;
pub mod game;
pub mod game_post;
pub mod helpers;
pub mod notice;
pub mod participant;
pub mod post;
pub mod profile;
pub mod user;

pub use board::{create_board, create_channel};
pub use game::create_game;
pub use game_post::create_game_post;
pub use notice::create_notice;
pub use participant::{create_guest, create_member, create_waiting};
pub use post::create_post;
pub use profile::create_profile;
pub use user::create_user;
