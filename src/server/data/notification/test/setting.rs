use super::*;

/// Tests that users without a stored row get the defaults.
///
/// Expected: all categories on, do-not-disturb off, 23:00-07:00
#[tokio::test]
async fn returns_defaults_without_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_notification_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let settings = NotificationSettingRepository::new(db).get(user.id).await?;

    assert_eq!(settings, NotificationSettings::defaults_for(user.id));

    Ok(())
}

/// Tests that the first read stores the defaults and later reads reuse the row.
///
/// Expected: exactly one settings row after two reads
#[tokio::test]
async fn first_read_creates_row() -> Result<(), AppError> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new().with_notification_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = NotificationSettingRepository::new(db);

    assert_eq!(entity::prelude::NotificationSetting::find().count(db).await?, 0);

    repo.get(user.id).await?;
    let stored = entity::prelude::NotificationSetting::find_by_id(user.id)
        .one(db)
        .await?
        .map(NotificationSettings::from_entity);
    repo.get(user.id).await?;

    assert_eq!(stored, Some(NotificationSettings::defaults_for(user.id)));
    assert_eq!(entity::prelude::NotificationSetting::find().count(db).await?, 1);

    Ok(())
}

/// Tests saving twice: first insert, then update.
///
/// Expected: the latest values are returned by get and get_many
#[tokio::test]
async fn saves_and_overwrites() -> Result<(), AppError> {
    let test = TestBuilder::new().with_notification_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let repo = NotificationSettingRepository::new(db);

    let mut settings = NotificationSettings::defaults_for(user.id);
    settings.comment_enabled = false;
    repo.save(&settings).await?;

    settings.dnd_enabled = true;
    settings.dnd_start_minute = 22 * 60;
    repo.save(&settings).await?;

    assert_eq!(repo.get(user.id).await?, settings);

    let many = repo.get_many(&[user.id, other.id]).await?;
    assert_eq!(many[&user.id], settings);
    assert_eq!(many[&other.id], NotificationSettings::defaults_for(other.id));

    Ok(())
}
