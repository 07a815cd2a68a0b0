pub use super::board::Entity as Board;
pub use super::channel::Entity as Channel;
pub use super::comment::Entity as Comment;
pub use super::game::Entity as Game;
pub use super::game_participant::Entity as GameParticipant;
pub use super::game_post::Entity as GamePost;
pub use super::notice::Entity as Notice;
pub use super::notification::Entity as Notification;
pub use super::notification_receipt::Entity as NotificationReceipt;
pub use super::notification_setting::Entity as NotificationSetting;
pub use super::post::Entity as Post;
pub use super::user::Entity as User;
pub use super::user_profile::Entity as UserProfile;
pub use super::waiting_participant::Entity as WaitingParticipant;
