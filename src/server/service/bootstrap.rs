use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for bootstrap codes in seconds
const BOOTSTRAP_CODE_TTL_SECONDS: u64 = 60;

const CODE_LENGTH: usize = 32;

#[derive(Clone)]
struct BootstrapCode {
    code: String,
    expires_at: Instant,
}

impl BootstrapCode {
    fn new(code: String, ttl: Duration) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory one-time code used to claim `SUPER_ADMIN` on a fresh install.
///
/// A code is generated at startup when no `SUPER_ADMIN` exists and printed to the log
/// together with a login link. The first login that presents it before it expires is
/// promoted; the code is then gone.
#[derive(Clone)]
pub struct BootstrapCodeService {
    code: Arc<RwLock<Option<BootstrapCode>>>,
    ttl: Duration,
}

impl BootstrapCodeService {
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(BOOTSTRAP_CODE_TTL_SECONDS))
    }

    fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a new random code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The generated 32-character alphanumeric code
    pub async fn generate(&self) -> String {
        let code = Self::generate_random_code();
        *self.code.write().await = Some(BootstrapCode::new(code.clone(), self.ttl));
        code
    }

    /// Checks `input_code` against the stored code and consumes it on success.
    ///
    /// Expired codes are dropped and fail validation. A wrong code leaves the stored
    /// one in place.
    ///
    /// # Returns
    /// - `true` - Code matched and was still valid
    /// - `false` - Code doesn't match, is expired, or no code exists
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        let mut code = self.code.write().await;

        let Some(stored) = code.as_ref() else {
            return false;
        };

        if stored.is_expired() {
            *code = None;
            return false;
        }

        if stored.code == input_code {
            *code = None;
            return true;
        }

        false
    }

    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    #[cfg(test)]
    async fn has_valid_code(&self) -> bool {
        self.code
            .read()
            .await
            .as_ref()
            .is_some_and(|code| !code.is_expired())
    }
}

impl Default for BootstrapCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    /// Tests generating a new code.
    ///
    /// Expected: 32 alphanumeric characters and a valid stored code
    #[tokio::test]
    async fn generates_alphanumeric_code() {
        let service = BootstrapCodeService::new();
        assert!(!service.has_valid_code().await);

        let code = service.generate().await;

        assert_eq!(code.len(), CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(service.has_valid_code().await);
    }

    /// Tests that a correct code is accepted exactly once.
    ///
    /// Expected: true on first use, false on replay
    #[tokio::test]
    async fn consumes_code_on_success() {
        let service = BootstrapCodeService::new();
        let code = service.generate().await;

        assert!(service.validate_and_consume(&code).await);
        assert!(!service.validate_and_consume(&code).await);
        assert!(!service.has_valid_code().await);
    }

    /// Tests that a wrong guess does not burn the stored code.
    ///
    /// Expected: false for the guess, true for the real code afterwards
    #[tokio::test]
    async fn keeps_code_after_wrong_guess() {
        let service = BootstrapCodeService::new();
        let code = service.generate().await;

        assert!(!service.validate_and_consume("wrong_code").await);
        assert!(service.validate_and_consume(&code).await);
    }

    /// Tests that regenerating replaces the previous code.
    ///
    /// Expected: the first code no longer validates
    #[tokio::test]
    async fn regenerating_replaces_code() {
        let service = BootstrapCodeService::new();
        let first = service.generate().await;
        let second = service.generate().await;

        assert!(!service.validate_and_consume(&first).await);
        assert!(service.validate_and_consume(&second).await);
    }

    /// Tests that an expired code is rejected.
    ///
    /// Expected: false once the TTL has elapsed
    #[tokio::test]
    async fn rejects_expired_code() {
        let service = BootstrapCodeService::with_ttl(Duration::from_millis(10));
        let code = service.generate().await;

        sleep(Duration::from_millis(30)).await;

        assert!(!service.validate_and_consume(&code).await);
        assert!(!service.has_valid_code().await);
    }
}
