use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::config;
use crate::construct::{require_callable, Arg, Construct};
use crate::decorate::Decorated;
use crate::errors::Result;

/// Decision returned by the teardown step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Let the failure leave the scope.
    Propagate,
    /// Swallow the failure; the scope yields no value.
    Suppress,
}

/// What went wrong inside a guarded block, as seen by [`ContextDecorator::exit`].
pub enum Failure<'a, E> {
    /// The block returned `Err`.
    Error(&'a E),
    /// The block panicked; this is the unwinding payload.
    Panic(&'a (dyn Any + Send)),
}

impl<E> Failure<'_, E> {
    pub fn error(&self) -> Option<&E> {
        match self {
            Failure::Error(e) => Some(e),
            Failure::Panic(_) => None,
        }
    }

    pub fn is_panic(&self) -> bool {
        matches!(self, Failure::Panic(_))
    }

    /// Message carried by a panic payload, when it is a string.
    pub fn panic_message(&self) -> Option<&str> {
        match self {
            Failure::Panic(payload) => payload
                .downcast_ref::<&'static str>()
                .copied()
                .or_else(|| payload.downcast_ref::<String>().map(String::as_str)),
            Failure::Error(_) => None,
        }
    }
}

/// An object that brackets a block with setup and teardown, and can wrap
/// callables so that every invocation runs inside that bracket.
///
/// Implementors pick the resource they acquire in [`enter`](Self::enter) and
/// the failures they swallow in [`exit`](Self::exit). Everything else is
/// provided.
pub trait ContextDecorator: Sized {
    /// Error type flowing through guarded blocks.
    type Error;

    /// Acquire phase. A failure here skips both the block and `exit`.
    fn enter(&mut self) -> std::result::Result<(), Self::Error> {
        Ok(())
    }

    /// Release phase. Runs after the block on every path. The returned
    /// decision only matters when `failure` is `Some`.
    fn exit(&mut self, _failure: Option<Failure<'_, Self::Error>>) -> Exit {
        Exit::Propagate
    }

    /// Run `body` inside the scope, handing it the instance as the handle.
    ///
    /// `Ok(None)` means the block failed and `exit` chose to suppress it.
    /// A panic that is not suppressed resumes with its original payload.
    fn scope<R, F>(&mut self, body: F) -> std::result::Result<Option<R>, Self::Error>
    where
        F: FnOnce(&mut Self) -> std::result::Result<R, Self::Error>,
    {
        self.enter()?;
        trace!("entered scope");

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| body(&mut *self)));
        match outcome {
            Ok(Ok(value)) => {
                self.exit(None);
                trace!("left scope");
                Ok(Some(value))
            }
            Ok(Err(err)) => {
                let decision = self.exit(Some(Failure::Error(&err)));
                trace!(?decision, "left scope after error");
                match decision {
                    Exit::Suppress => {
                        debug!("error suppressed on scope exit");
                        Ok(None)
                    }
                    Exit::Propagate => Err(err),
                }
            }
            Err(payload) => {
                let decision = self.exit(Some(Failure::Panic(&*payload)));
                trace!(?decision, "left scope after panic");
                match decision {
                    Exit::Suppress => {
                        warn!("panic suppressed on scope exit");
                        Ok(None)
                    }
                    Exit::Propagate => panic::resume_unwind(payload),
                }
            }
        }
    }

    /// Wrap `func` so each call runs inside this decorator's scope.
    fn decorate<F>(self, func: F) -> Decorated<Self, F> {
        Decorated::new(self, func)
    }

    /// Dynamic constructor: no argument configures a default instance,
    /// a callable decorates it right away, anything else is rejected.
    fn construct<F>(first: Option<Arg<F>>) -> Result<Construct<Self, F>>
    where
        Self: Default,
    {
        match first {
            None => Ok(Construct::Configured(Self::default())),
            Some(arg) => {
                let func = require_callable(arg)?;
                Ok(Construct::Decorated(Self::default().decorate(func)))
            }
        }
    }

    /// Build an instance from keyword arguments given as a JSON object.
    fn configure(kwargs: Value) -> Result<Self>
    where
        Self: DeserializeOwned,
    {
        config::configure(kwargs)
    }
}
