use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use optkit_core::Maybe;

/// Await `future`, returning `Some` with its `Ok` value.
///
/// An `Err` output, or a panic while polling, becomes `None` and the reason is
/// dropped. A swallowed panic still runs the process panic hook, which by
/// default prints to stderr. There is no timeout: a future that never
/// completes keeps the caller suspended forever.
pub async fn resolve_to_option<T, E, F>(future: F) -> Maybe<T>
where
    F: Future<Output = Result<T, E>>,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(Ok(value)) => Maybe::Some(value),
        Ok(Err(_)) | Err(_) => Maybe::None,
    }
}
