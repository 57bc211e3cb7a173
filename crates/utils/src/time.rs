//! Async delay and polling helpers built on `tokio::time`.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

/// Pause used between attempts when callers have no preference.
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(1);

/// Sleep for `ms` milliseconds.
pub async fn usleep(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Sleep for `secs` seconds; fractions are honoured. Negative, NaN or
/// infinite inputs sleep for zero time.
pub async fn sleep(secs: f64) {
    let duration = Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO);
    tokio::time::sleep(duration).await;
}

/// Run `attempt` until `condition` accepts its result.
///
/// `attempt` always runs at least once. Between rejected attempts the task
/// sleeps for `pause`. Returns the accepted result.
pub async fn until<T, C, A, Fut>(mut condition: C, mut attempt: A, pause: Duration) -> T
where
    C: FnMut(&T) -> bool,
    A: FnMut() -> Fut,
    Fut: Future<Output = T>,
{
    let mut result = attempt().await;
    let mut attempts: u64 = 1;
    while !condition(&result) {
        debug!(attempts, pause = ?pause, "condition not met, retrying");
        tokio::time::sleep(pause).await;
        result = attempt().await;
        attempts += 1;
    }
    debug!(attempts, "condition met");
    result
}
