use std::time::Duration;
use tokio::sync::watch;

#[derive(Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff: Duration::from_secs(1),
        }
    }
}

/// Result of driving an attempt loop to its end.
#[derive(Debug)]
pub enum RetryOutcome<T> {
    /// An attempt produced a value.
    Completed(T),
    /// Every attempt was consumed without producing a value.
    Exhausted,
    /// The cancel flag flipped (or its sender went away) mid-loop.
    Cancelled,
}

/// Runs `attempt_fn` up to `config.max_attempts` times with a fixed delay
/// between attempts. The closure receives the 1-based attempt number and
/// resolves to `Ok(Some(value))` to finish, `Ok(None)` to consume an
/// attempt and back off, or `Err` to abort the whole loop immediately.
///
/// Attempts are strictly sequential: the next attempt starts only after
/// the previous response and its backoff delay have completed.
pub async fn retry_fixed<F, Fut, T, E>(
    config: &RetryConfig,
    cancel: &mut watch::Receiver<bool>,
    mut attempt_fn: F,
) -> Result<RetryOutcome<T>, E>
where
    F: FnMut(u32) -> Fut,
    Fut: std::future::Future<Output = Result<Option<T>, E>>,
{
    for attempt in 1..=config.max_attempts {
        if *cancel.borrow() {
            return Ok(RetryOutcome::Cancelled);
        }

        match attempt_fn(attempt).await? {
            Some(value) => return Ok(RetryOutcome::Completed(value)),
            None => {
                if attempt == config.max_attempts {
                    break;
                }
                tokio::select! {
                    _ = tokio::time::sleep(config.backoff) => {}
                    _ = wait_cancelled(cancel) => return Ok(RetryOutcome::Cancelled),
                }
            }
        }
    }

    Ok(RetryOutcome::Exhausted)
}

/// Resolves once the flag flips to true. A dropped sender means whoever
/// owned the loop is gone, which counts as cancellation too.
async fn wait_cancelled(cancel: &mut watch::Receiver<bool>) {
    let _ = cancel.wait_for(|cancelled| *cancelled).await;
}
