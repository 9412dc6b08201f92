use serde_json::Value;

use crate::decorate::Decorated;
use crate::errors::{DecoError, Result};

/// First positional argument handed to the dynamic constructor.
pub enum Arg<F> {
    Callable(F),
    Value(Value),
}

impl<F> Arg<F> {
    pub fn value(v: impl Into<Value>) -> Self {
        Arg::Value(v.into())
    }
}

/// What [`ContextDecorator::construct`](crate::ContextDecorator::construct) produced.
pub enum Construct<D, F> {
    /// Configured only; decorate later or use as a scope.
    Configured(D),
    /// The callable was decorated straight away.
    Decorated(Decorated<D, F>),
}

impl<D, F> Construct<D, F> {
    pub fn into_configured(self) -> Option<D> {
        match self {
            Construct::Configured(d) => Some(d),
            Construct::Decorated(_) => None,
        }
    }

    pub fn into_decorated(self) -> Option<Decorated<D, F>> {
        match self {
            Construct::Decorated(w) => Some(w),
            Construct::Configured(_) => None,
        }
    }
}

/// Unwrap a callable argument, rejecting plain values.
pub fn require_callable<F>(arg: Arg<F>) -> Result<F> {
    match arg {
        Arg::Callable(f) => Ok(f),
        Arg::Value(v) => Err(DecoError::InvalidArgument(format!(
            "expected a callable, got {v}"
        ))),
    }
}
