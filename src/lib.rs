//! Objects that work both as function decorators and as scoped guards.
//!
//! An implementation of [`ContextDecorator`] brackets a block with `enter` and
//! `exit`; `exit` sees any error or panic from the block and answers with an
//! [`Exit`] decision. The same instance can wrap a callable with
//! [`ContextDecorator::decorate`], so every call runs inside that bracket.

pub mod errors;
pub mod config;
pub mod construct;
pub mod decorate;
pub mod multiplier;
mod scope;

pub use construct::{require_callable, Arg, Construct};
pub use decorate::{Apply, Decorated, FnMeta};
pub use errors::{DecoError, Result};
pub use multiplier::{Multiplier, Raised};
pub use scope::{ContextDecorator, Exit, Failure};
