//! Synchronous stages.
//!
//! A [`Stage<I>`] takes an input of type `I` and produces a [`Response`]. Any
//! closure `Fn(I) -> Response<O>` is already a stage, so most chains are built
//! from plain closures and functions. Stages that take no input are built with
//! [`source`].
//!
//! # Examples
//!
//! ```rust
//! use rop::prelude::*;
//!
//! let parse = |s: &str| -> Response<i32> { s.parse::<i32>().into() };
//! let double = |v: i32| Response::success(v * 2);
//!
//! let chain = parse.then(double);
//! assert_eq!(chain.run("21"), Response::success(42));
//! assert!(chain.run("twenty-one").is_failure());
//! ```

use std::future::Future;

use crate::{
    async_stage::{AsyncStage, Lifted},
    compose::Then,
    response::Response,
};

/// A step on the railway that completes immediately.
///
/// Stages are invoked through `&self` and hold no state between calls, so a
/// built chain can be run any number of times.
pub trait Stage<I> {
    /// Success type of the produced response
    type Output;

    /// Run the stage on `input`.
    fn run(&self, input: I) -> Response<Self::Output>;

    /// Chain `next` after this stage.
    ///
    /// `next` only runs when this stage succeeds, and receives the unwrapped
    /// success value. See [`then`](crate::then).
    fn then<B>(self, next: B) -> Then<Self, B>
    where
        Self: Sized,
        B: Stage<Self::Output>,
    {
        Then::new(self, next)
    }

    /// Lift this stage into an [`AsyncStage`] whose future is already complete.
    ///
    /// See [`to_async`](crate::to_async).
    fn to_async(self) -> Lifted<Self>
    where
        Self: Sized,
    {
        Lifted::new(self)
    }

    /// Erase the concrete type of this stage.
    ///
    /// ```rust
    /// use rop::prelude::*;
    ///
    /// let steps: Vec<BoxStage<'_, i32, i32>> = vec![
    ///     (|v: i32| Response::success(v + 1)).boxed(),
    ///     (|v: i32| Response::success(v * 10)).then(|v: i32| Response::success(v - 1)).boxed(),
    /// ];
    /// let results: Vec<_> = steps.iter().map(|s| s.run(4)).collect();
    /// assert_eq!(results, vec![Response::success(5), Response::success(39)]);
    /// ```
    fn boxed<'a>(self) -> BoxStage<'a, I, Self::Output>
    where
        Self: Sized + Send + Sync + 'a,
    {
        Box::new(move |input: I| self.run(input))
    }
}

/// A type-erased synchronous stage.
pub type BoxStage<'a, I, O> = Box<dyn Fn(I) -> Response<O> + Send + Sync + 'a>;

impl<I, O, F> Stage<I> for F
where
    F: Fn(I) -> Response<O>,
{
    type Output = O;

    fn run(&self, input: I) -> Response<O> {
        self(input)
    }
}

/// A stage that takes no input.
///
/// Wraps a zero-argument closure so it can start a chain. Depending on the
/// closure, a `Source` is a [`Stage<()>`] or an [`AsyncStage<()>`]; either way
/// it is invoked with `()`.
#[derive(Debug, Clone, Copy)]
pub struct Source<F>(F);

/// Create a stage that takes no input.
///
/// ```rust
/// use rop::prelude::*;
///
/// let load = source(|| Response::success(String::from("42")));
/// let chain = load.then(|s: String| -> Response<i32> { s.parse::<i32>().into() });
/// assert_eq!(chain.run(()), Response::success(42));
/// ```
pub fn source<F>(f: F) -> Source<F> {
    Source(f)
}

impl<O, F> Stage<()> for Source<F>
where
    F: Fn() -> Response<O>,
{
    type Output = O;

    fn run(&self, (): ()) -> Response<O> {
        (self.0)()
    }
}

impl<O, F, Fut> AsyncStage<()> for Source<F>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Response<O>>,
{
    type Output = O;
    type Future<'a>
        = Fut
    where
        Self: 'a;

    fn run_async(&self, (): ()) -> Self::Future<'_> {
        (self.0)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_closure_is_stage() {
        let double = |v: i32| Response::success(v * 2);
        assert_eq!(double.run(4), Response::success(8));
        assert_eq!(double.run(5), Response::success(10));
    }

    #[test]
    fn test_fn_item_is_stage() {
        fn non_empty(s: String) -> Response<String> {
            if s.is_empty() {
                Response::failure("empty")
            } else {
                Response::success(s)
            }
        }

        assert_eq!(non_empty.run("a".to_string()), Response::success("a".to_string()));
        assert_eq!(non_empty.run(String::new()), Response::failure("empty"));
    }

    #[test]
    fn test_source_runs_on_every_call() {
        let calls = Cell::new(0);
        let counter = source(|| {
            calls.set(calls.get() + 1);
            Response::success(calls.get())
        });

        assert_eq!(counter.run(()), Response::success(1));
        assert_eq!(counter.run(()), Response::success(2));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_source_failure() {
        let missing = source(|| Response::<u8>::failure("no config"));
        assert_eq!(missing.run(()), Response::failure("no config"));
    }

    #[test]
    fn test_boxed_stage_behaves_like_original() {
        let stage = |v: u32| {
            if v > 10 {
                Response::failure("too big")
            } else {
                Response::success(v + 1)
            }
        };
        let boxed = stage.boxed();

        assert_eq!(boxed.run(3), stage.run(3));
        assert_eq!(boxed.run(11), stage.run(11));
    }

    #[test]
    fn test_boxed_stage_chains() {
        let boxed = (|v: u32| Response::success(v + 1)).boxed();
        let chain = boxed.then(|v: u32| Response::success(v * 3));
        assert_eq!(chain.run(1), Response::success(6));
    }
}
