use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::outcome::OperationError;

/// Capability that turns one work item into an asynchronous result.
///
/// The executor never looks at the item itself; it only hands it to `run`.
/// Any error type convertible into [`OperationError`] is accepted, so
/// providers can fail with their own error types or with plain strings.
#[async_trait]
pub trait OperationProvider<I: Sync>: Send + Sync {
    type Output: Send;
    type Error: Into<OperationError> + Send;

    async fn run(&self, item: &I) -> Result<Self::Output, Self::Error>;
}

/// Provider backed by a closure. Built with [`provider_fn`].
#[derive(Clone)]
pub struct ProviderFn<F> {
    f: F,
}

/// Wraps a closure returning a future as an [`OperationProvider`].
///
/// The returned future must not borrow the item; clone what it needs.
pub fn provider_fn<F>(f: F) -> ProviderFn<F> {
    ProviderFn { f }
}

#[async_trait]
impl<I, F, Fut, T, E> OperationProvider<I> for ProviderFn<F>
where
    I: Sync,
    F: Fn(&I) -> Fut + Send + Sync,
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Into<OperationError> + Send,
{
    type Output = T;
    type Error = E;

    async fn run(&self, item: &I) -> Result<T, E> {
        (self.f)(item).await
    }
}

#[async_trait]
impl<I, P> OperationProvider<I> for Arc<P>
where
    I: Sync,
    P: OperationProvider<I> + ?Sized,
{
    type Output = P::Output;
    type Error = P::Error;

    async fn run(&self, item: &I) -> Result<Self::Output, Self::Error> {
        (**self).run(item).await
    }
}

#[async_trait]
impl<I, P> OperationProvider<I> for Box<P>
where
    I: Sync,
    P: OperationProvider<I> + ?Sized,
{
    type Output = P::Output;
    type Error = P::Error;

    async fn run(&self, item: &I) -> Result<Self::Output, Self::Error> {
        (**self).run(item).await
    }
}
