use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll, ready},
};

use pin_project_lite::pin_project;

use super::bind::{Bind, bind};
use crate::{async_stage::AsyncStage, response::Response, stage::Stage};

/// Two stages run back to back.
///
/// The second stage only runs once the first has succeeded, and receives the
/// first stage's unwrapped value. Its response is returned as is. A failure of
/// the first stage is returned instead, and the second stage is never called.
///
/// Created by [`then`], [`then_async`], [`Stage::then`] or
/// [`AsyncStage::then_async`]. It is a [`Stage`] when both halves are
/// synchronous and an [`AsyncStage`] when both are asynchronous.
#[derive(Debug, Clone, Copy)]
pub struct Then<A, B> {
    first: A,
    second: Bind<B>,
}

impl<A, B> Then<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Then {
            first,
            second: bind(second),
        }
    }
}

/// Run `first`, then feed its success value to `second`.
///
/// Works for stages with an input and for [`source`](crate::source) stages,
/// which take `()`.
///
/// ```rust
/// use rop::prelude::*;
///
/// fn parse(s: &str) -> Response<i32> {
///     s.parse().map_or_else(|_| Response::failure("not a number"), Response::success)
/// }
///
/// let chain = then(parse, |v: i32| Response::success(v * 2));
/// assert_eq!(chain.run("42"), Response::success(84));
/// assert_eq!(chain.run("abc"), Response::failure("not a number"));
/// ```
pub fn then<I, A, B>(first: A, second: B) -> Then<A, B>
where
    A: Stage<I>,
    B: Stage<A::Output>,
{
    Then::new(first, second)
}

/// Await `first`, then feed its success value to `second` and await that.
///
/// Synchronous stages take part through [`to_async`](crate::to_async).
///
/// ```rust
/// use rop::prelude::*;
///
/// let fetch = source(|| async { Response::success(20_u32) });
/// let chain = then_async(fetch, to_async(|v: u32| Response::success(v + 1)));
/// let result = futures::executor::block_on(chain.run_async(()));
/// assert_eq!(result, Response::success(21));
/// ```
pub fn then_async<I, A, B>(first: A, second: B) -> Then<A, B>
where
    A: AsyncStage<I>,
    B: AsyncStage<A::Output>,
{
    Then::new(first, second)
}

impl<I, A, B> Stage<I> for Then<A, B>
where
    A: Stage<I>,
    B: Stage<A::Output>,
{
    type Output = B::Output;

    fn run(&self, input: I) -> Response<B::Output> {
        self.second.run(self.first.run(input))
    }
}

impl<I, A, B> AsyncStage<I> for Then<A, B>
where
    A: AsyncStage<I>,
    B: AsyncStage<A::Output>,
{
    type Output = B::Output;
    type Future<'a>
        = ThenFuture<
        'a,
        A::Future<'a>,
        <Bind<B> as AsyncStage<Response<A::Output>>>::Future<'a>,
        Bind<B>,
    >
    where
        Self: 'a;

    fn run_async(&self, input: I) -> Self::Future<'_> {
        ThenFuture::First {
            future: self.first.run_async(input),
            next: &self.second,
        }
    }
}

pin_project! {
    #[project = ThenFutureProj]
    /// Future for an asynchronous [`Then`].
    ///
    /// Awaits the first stage, then starts and awaits the second. The second
    /// stage is never started before the first has completed.
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub enum ThenFuture<'a, F1, F2, S> {
        First { #[pin] future: F1, next: &'a S },
        Second { #[pin] future: F2 },
        Done,
    }
}

impl<'a, F1, F2, S> Future for ThenFuture<'a, F1, F2, S>
where
    F1: Future,
    F2: Future,
    S: AsyncStage<F1::Output, Future<'a> = F2> + 'a,
{
    type Output = F2::Output;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        loop {
            match self.as_mut().project() {
                ThenFutureProj::First { future, next } => {
                    let next: &'a S = *next;
                    let response = ready!(future.poll(cx));
                    self.set(ThenFuture::Second {
                        future: next.run_async(response),
                    });
                }
                ThenFutureProj::Second { future } => {
                    let output = ready!(future.poll(cx));
                    self.set(ThenFuture::Done);
                    return Poll::Ready(output);
                }
                ThenFutureProj::Done => panic!("`ThenFuture` polled after completion"),
            }
        }
    }
}
