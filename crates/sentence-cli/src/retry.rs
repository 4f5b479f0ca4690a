//! Re-draw logic for lines that fail to decode.

use sentence::Result;
use tracing::warn;

/// Run `attempt`, repeating it up to `retries` more times while it fails
/// with a retryable error.
///
/// Non-retryable errors are returned at once. After the last retry the
/// final error is returned unchanged.
pub fn with_retry<T>(retries: u32, mut attempt: impl FnMut() -> Result<T>) -> Result<T> {
    let mut attempts = 0u32;
    loop {
        match attempt() {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() && attempts < retries => {
                attempts += 1;
                warn!("{}, drawing again (retry {}/{})", e, attempts, retries);
            }
            Err(e) => return Err(e),
        }
    }
}
