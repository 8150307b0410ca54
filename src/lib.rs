//! # rop: Railway-Oriented Composition
//!
//! Chain fallible steps so that the first failure skips everything after it.
//!
//! ## Core Types
//!
//! - **[`Response<T>`]**: a success value or a failure reason
//! - **[`Stage<I>`]**: a step that answers immediately; any `Fn(I) -> Response<O>`
//! - **[`AsyncStage<I>`]**: a step that answers through a future; any
//!   `Fn(I) -> impl Future<Output = Response<O>>`
//!
//! ## Key Features
//!
//! - **Short-circuiting**: a failed stage's reason reaches the end of the chain
//!   untouched, and no later stage runs
//! - **Sync and async**: [`to_async`] lets synchronous stages join async chains
//! - **No input needed**: [`source`] starts a chain from a zero-argument closure
//! - **Reusable**: built chains hold no state and can be run any number of
//!   times, from any number of tasks
//!
//! ## Example
//!
//! ```
//! use rop::prelude::*;
//!
//! fn parse(s: &str) -> Response<i32> {
//!     s.parse().map_or_else(|_| Response::failure("not a number"), Response::success)
//! }
//!
//! let chain = parse.then(|v: i32| Response::success(v * 2));
//! assert_eq!(chain.run("42"), Response::success(84));
//! assert_eq!(chain.run("abc"), Response::failure("not a number"));
//!
//! // The same chain, with a second stage that has to wait
//! let chain = to_async(parse).then_async(|v: i32| async move { Response::success(v * 2) });
//! assert_eq!(futures::executor::block_on(chain.run_async("42")), Response::success(84));
//! ```
//!
//! ## Common Functions
//!
//! - [`then(a, b)`](then) - Run `a`, then `b` on its success value
//! - [`then_async(a, b)`](then_async) - Await `a`, then await `b` on its success value
//! - [`to_async(s)`](to_async) - Present a sync stage as an async one
//! - [`bind(f)`](bind) - Make `f` accept a whole [`Response`]
//! - [`source(f)`](source) - Start a chain from a closure without input

mod async_stage;
mod compose;
mod response;
mod stage;

pub mod prelude;

pub use async_stage::*;
pub use compose::*;
pub use response::*;
pub use stage::*;
