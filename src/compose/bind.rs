use futures::future::{Either, Ready, ready};

use crate::{async_stage::AsyncStage, response::Response, stage::Stage};

/// Lifts a stage so that it consumes a whole [`Response`].
///
/// On `Success(v)` the inner stage runs on `v` and its response is returned
/// as is. On `Failure(reason)` the inner stage is never called and the same
/// reason comes back out.
///
/// `Bind` is a [`Stage`] when the inner stage is synchronous and an
/// [`AsyncStage`] when it is asynchronous.
#[derive(Debug, Clone, Copy)]
pub struct Bind<F>(F);

/// Wrap `f` so it accepts the previous stage's [`Response`] instead of its value.
///
/// ```rust
/// use rop::prelude::*;
///
/// let double = bind(|v: i32| Response::success(v * 2));
/// assert_eq!(double.run(Response::success(21)), Response::success(42));
/// assert_eq!(double.run(Response::failure("bad")), Response::failure("bad"));
/// ```
pub fn bind<F>(f: F) -> Bind<F> {
    Bind(f)
}

impl<F> Bind<F> {
    /// Unwrap the inner stage.
    pub fn into_inner(self) -> F {
        self.0
    }
}

fn short_circuit<O>(reason: String) -> Response<O> {
    tracing::trace!(reason = %reason, "short-circuiting remaining stages");
    Response::Failure(reason)
}

impl<T, F> Stage<Response<T>> for Bind<F>
where
    F: Stage<T>,
{
    type Output = F::Output;

    fn run(&self, input: Response<T>) -> Response<F::Output> {
        match input {
            Response::Success(value) => self.0.run(value),
            Response::Failure(reason) => short_circuit(reason),
        }
    }
}

impl<T, F> AsyncStage<Response<T>> for Bind<F>
where
    F: AsyncStage<T>,
{
    type Output = F::Output;
    type Future<'a>
        = Either<F::Future<'a>, Ready<Response<F::Output>>>
    where
        Self: 'a;

    fn run_async(&self, input: Response<T>) -> Self::Future<'_> {
        match input {
            Response::Success(value) => Either::Left(self.0.run_async(value)),
            Response::Failure(reason) => Either::Right(ready(short_circuit(reason))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_bind_runs_on_success() {
        let calls = Cell::new(0);
        let stage = bind(|v: u32| {
            calls.set(calls.get() + 1);
            Response::success(v.to_string())
        });

        assert_eq!(stage.run(Response::success(7)), Response::success("7".to_string()));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_bind_skips_on_failure() {
        let calls = Cell::new(0);
        let stage = bind(|v: u32| {
            calls.set(calls.get() + 1);
            Response::success(v)
        });

        assert_eq!(stage.run(Response::failure("upstream")), Response::failure("upstream"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_bind_returns_inner_failure_verbatim() {
        let stage = bind(|_: u32| Response::<u32>::failure("inner"));
        assert_eq!(stage.run(Response::success(1)), Response::failure("inner"));
    }

    #[tokio::test]
    async fn test_bind_async_runs_on_success() {
        let stage = bind(|v: u32| async move { Response::success(v + 1) });
        assert_eq!(stage.run_async(Response::success(1)).await, Response::success(2));
    }

    #[tokio::test]
    async fn test_bind_async_skips_on_failure() {
        let calls = Cell::new(0);
        let stage = bind(|v: u32| {
            calls.set(calls.get() + 1);
            async move { Response::success(v) }
        });

        let response = stage.run_async(Response::failure("upstream")).await;
        assert_eq!(response, Response::failure("upstream"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_bind_into_inner() {
        let stage = bind(|v: u8| Response::success(v));
        assert_eq!(stage.into_inner().run(3), Response::success(3));
    }
}
