//! Commonly used imports
//!
//! Use `use rop::prelude::*;` for quick access to the traits, the response type
//! and the combinators.

// Core types
pub use crate::{AsyncStage, Response, ResponseType, Stage};

// Constructors
pub use crate::{BoxStage, source};

// Composition
pub use crate::{bind, then, then_async, to_async};
