//! Composing stages into chains
//!
//! [`bind`] is the single short-circuit rule: it lets a stage accept the
//! previous stage's [`Response`](crate::Response), running only on success.
//! [`then`] and [`then_async`] are built on it.

mod bind;
mod then;

pub use bind::{Bind, bind};
pub use then::{Then, ThenFuture, then, then_async};
