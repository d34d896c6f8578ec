//! Bounded concurrent map over a set of independent targets
//!
//! Every target becomes its own tokio task, so work that blocks or burns CPU
//! still runs in parallel on a multi-thread runtime. At most `concurrency`
//! tasks run their work at once. Each target yields exactly one result: a
//! unit that panics is turned into a result through the caller's `recover`
//! function. Results come back in completion order; callers that display
//! them sort first.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{Id, JoinError, JoinSet};
use tracing::{debug, warn};

/// A target whose unit of work did not return normally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFailure<T> {
    pub target: T,
    pub reason: String,
}

impl<T> UnitFailure<T> {
    fn from_join_error(target: T, error: JoinError) -> Self {
        let reason = if error.is_panic() {
            let payload = error.into_panic();
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            format!("task panicked: {message}")
        } else {
            "task was cancelled".to_string()
        };
        Self { target, reason }
    }
}

/// Runs `work` over every target with at most `concurrency` units in flight
///
/// `concurrency` is clamped to `1..=targets.len()`. An empty target list
/// returns immediately without calling `work`.
pub async fn fan_out<T, O, F, Fut, R>(
    targets: Vec<T>,
    concurrency: usize,
    work: F,
    recover: R,
) -> Vec<O>
where
    T: Clone,
    F: Fn(T) -> Fut,
    Fut: Future<Output = O> + Send + 'static,
    O: Send + 'static,
    R: Fn(UnitFailure<T>) -> O,
{
    fan_out_observed(targets, concurrency, work, recover, |_| {}).await
}

/// Like [`fan_out`], calling `on_complete` as each result arrives
pub async fn fan_out_observed<T, O, F, Fut, R, C>(
    targets: Vec<T>,
    concurrency: usize,
    work: F,
    recover: R,
    mut on_complete: C,
) -> Vec<O>
where
    T: Clone,
    F: Fn(T) -> Fut,
    Fut: Future<Output = O> + Send + 'static,
    O: Send + 'static,
    R: Fn(UnitFailure<T>) -> O,
    C: FnMut(&O),
{
    let total = targets.len();
    if total == 0 {
        return Vec::new();
    }

    let limit = concurrency.clamp(1, total);
    debug!(total, concurrency = limit, "fan-out started");

    let semaphore = Arc::new(Semaphore::new(limit));
    let mut units = JoinSet::new();
    let mut pending: HashMap<Id, T> = HashMap::with_capacity(total);

    for target in targets {
        let unit = work(target.clone());
        let semaphore = Arc::clone(&semaphore);
        let handle = units.spawn(async move {
            // The semaphore is never closed, so acquire only waits
            let _permit = semaphore.acquire_owned().await.ok();
            unit.await
        });
        pending.insert(handle.id(), target);
    }

    let mut results = Vec::with_capacity(total);
    while let Some(joined) = units.join_next_with_id().await {
        let result = match joined {
            Ok((id, output)) => {
                pending.remove(&id);
                output
            }
            Err(error) => match pending.remove(&error.id()) {
                Some(target) => {
                    let failure = UnitFailure::from_join_error(target, error);
                    warn!(reason = %failure.reason, "unit of work failed");
                    recover(failure)
                }
                None => {
                    warn!("finished task has no recorded target: {error}");
                    continue;
                }
            },
        };
        on_complete(&result);
        results.push(result);
    }

    debug!(total, "fan-out finished");
    results
}
