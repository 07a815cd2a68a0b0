use super::*;

/// Tests listing channels with their boards.
///
/// Expected: channels in creation order, each with its own boards
#[tokio::test]
async fn lists_channels_with_boards() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (channel, board) = factory::helpers::create_board_with_channel(db).await?;
    let empty = factory::create_channel(db).await?;

    let channels = BoardService::new(db).list_channels().await?;

    assert_eq!(channels.len(), 2);
    assert_eq!(channels[0].id, channel.id);
    assert_eq!(channels[0].boards.len(), 1);
    assert_eq!(channels[0].boards[0].id, board.id);
    assert_eq!(channels[1].id, empty.id);
    assert!(channels[1].boards.is_empty());

    Ok(())
}
