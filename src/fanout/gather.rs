use crate::Result;
use futures::future::try_join_all;
use std::future::Future;

/// Runs `f` over every item concurrently and joins the results.
///
/// The output is positionally aligned with the input regardless of which
/// call finishes first. The first failure is returned immediately and the
/// calls still in flight are dropped; there are no partial results.
pub async fn gather<I, F, Fut, T>(items: I, f: F) -> Result<Vec<T>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    try_join_all(items.into_iter().map(f)).await
}
