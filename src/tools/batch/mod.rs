//! Batch Tools


use futures_util::future::join_all;
use std::future::Future;
use std::time::Duration;

/// Run async operations in sequential batches, settling every batch fully.
///
/// Each batch of `batch_size` items runs concurrently; the next batch starts only
/// after every operation in the current one has finished and `delay` has elapsed.
/// Operations should encode failure in `R` so one item never affects its siblings.
/// Results come back in input order.
pub async fn batch_settled<T, F, Fut, R>(
    items: Vec<T>,
    batch_size: usize,
    delay: Duration,
    operation: F,
) -> Vec<R>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = R>,
{
    let size = batch_size.max(1);
    let mut results = Vec::with_capacity(items.len());
    let mut pending = items.into_iter().peekable();

    while pending.peek().is_some() {
        let chunk: Vec<T> = pending.by_ref().take(size).collect();
        results.extend(join_all(chunk.into_iter().map(&operation)).await);

        if pending.peek().is_some() && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    results
}
