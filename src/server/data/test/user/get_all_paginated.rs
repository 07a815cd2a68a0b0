use super::*;

/// Tests paging through users in ID order.
///
/// Expected: Ok with two users on the first page, one on the second, 3 total
#[tokio::test]
async fn pages_users_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let third = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let (page0, total, pages) = repo.get_all_paginated(0, 2).await?;
    let (page1, _, _) = repo.get_all_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(pages, 2);
    assert_eq!(
        page0.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
    assert_eq!(page1.len(), 1);
    assert_eq!(page1[0].id, third.id);

    Ok(())
}
