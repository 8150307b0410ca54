//! Asynchronous stages.
//!
//! [`AsyncStage`] mirrors [`Stage`] for steps that have to wait for something
//! before they can answer. Any closure returning a future of a [`Response`] is
//! an async stage. A synchronous stage joins an async chain through
//! [`to_async`], which answers with an already-completed future.
//!
//! # Examples
//!
//! ```rust
//! use rop::prelude::*;
//!
//! let parse = |s: &str| -> Response<i32> { s.parse::<i32>().into() };
//! let double = |v: i32| async move { Response::success(v * 2) };
//!
//! let chain = to_async(parse).then_async(double);
//! let result = futures::executor::block_on(chain.run_async("42"));
//! assert_eq!(result, Response::success(84));
//! ```

use std::future::Future;

use futures::future::{Ready, ready};

use crate::{compose::Then, response::Response, stage::Stage};

/// A step on the railway whose answer arrives through a future.
///
/// Like [`Stage`], an async stage is invoked through `&self`; the returned
/// future may borrow the stage for as long as it runs.
pub trait AsyncStage<I> {
    /// Success type of the produced response
    type Output;

    /// Future resolving to the stage's response
    type Future<'a>: Future<Output = Response<Self::Output>>
    where
        Self: 'a;

    /// Start the stage on `input`.
    fn run_async(&self, input: I) -> Self::Future<'_>;

    /// Chain `next` after this stage.
    ///
    /// The returned stage awaits this one to completion, then runs `next` on the
    /// success value only. See [`then_async`](crate::then_async).
    fn then_async<B>(self, next: B) -> Then<Self, B>
    where
        Self: Sized,
        B: AsyncStage<Self::Output>,
    {
        Then::new(self, next)
    }
}

impl<I, O, F, Fut> AsyncStage<I> for F
where
    F: Fn(I) -> Fut,
    Fut: Future<Output = Response<O>>,
{
    type Output = O;
    type Future<'a>
        = Fut
    where
        Self: 'a;

    fn run_async(&self, input: I) -> Self::Future<'_> {
        self(input)
    }
}

/// A synchronous stage presented as an [`AsyncStage`].
///
/// Created by [`to_async`] or [`Stage::to_async`].
#[derive(Debug, Clone, Copy)]
pub struct Lifted<S>(S);

impl<S> Lifted<S> {
    pub(crate) fn new(stage: S) -> Self {
        Lifted(stage)
    }

    /// Unwrap the synchronous stage.
    pub fn into_inner(self) -> S {
        self.0
    }
}

/// Lift a synchronous stage into an async one.
///
/// The stage runs synchronously when [`run_async`](AsyncStage::run_async) is
/// called; the returned future is already complete and carries its response.
/// Lifting never changes the response a stage produces.
///
/// ```rust
/// use rop::prelude::*;
///
/// let lifted = to_async(|v: u8| Response::success(v + 1));
/// let result = futures::executor::block_on(lifted.run_async(1));
/// assert_eq!(result, Response::success(2));
/// ```
pub fn to_async<I, S>(stage: S) -> Lifted<S>
where
    S: Stage<I>,
{
    Lifted(stage)
}

impl<I, S> AsyncStage<I> for Lifted<S>
where
    S: Stage<I>,
{
    type Output = S::Output;
    type Future<'a>
        = Ready<Response<S::Output>>
    where
        Self: 'a;

    fn run_async(&self, input: I) -> Self::Future<'_> {
        ready(self.0.run(input))
    }
}
