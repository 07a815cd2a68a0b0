use super::*;

/// Tests that a stored token can only be taken once.
///
/// Expected: Some(token), then None
#[tokio::test]
async fn token_is_taken_once() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    let csrf = CsrfSession::new(session);
    csrf.set_token("state-abc".to_string()).await?;

    assert_eq!(csrf.take_token().await?, Some("state-abc".to_string()));
    assert_eq!(csrf.take_token().await?, None);

    Ok(())
}

/// Tests the callback state matching the stored token.
///
/// Expected: Ok(()), and a replay of the same state fails
#[tokio::test]
async fn validates_matching_state_once() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    let csrf = CsrfSession::new(session);
    csrf.set_token("state-abc".to_string()).await?;

    csrf.validate("state-abc").await?;
    let replay = csrf.validate("state-abc").await;

    assert!(matches!(
        replay,
        Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
    ));

    Ok(())
}

/// Tests a callback state that differs from the stored token.
///
/// Expected: Err(AuthError::CsrfValidationFailed)
#[tokio::test]
async fn rejects_mismatched_state() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    let csrf = CsrfSession::new(session);
    csrf.set_token("state-abc".to_string()).await?;

    let result = csrf.validate("state-xyz").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
    ));
    assert_eq!(csrf.take_token().await?, None);

    Ok(())
}

/// Tests a callback arriving without a login having been started.
///
/// Expected: Err(AuthError::CsrfValidationFailed)
#[tokio::test]
async fn rejects_missing_stored_token() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    let result = CsrfSession::new(session).validate("state-abc").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
    ));

    Ok(())
}
