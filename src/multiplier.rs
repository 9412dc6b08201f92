use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::decorate::Apply;
use crate::scope::{ContextDecorator, Exit, Failure};

/// Errors a block guarded by [`Multiplier`] may raise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Raised {
    #[error("warning: {0}")]
    Warning(String),
    #[error("error: {0}")]
    Error(String),
}

/// Decorator that multiplies the wrapped callable's result, and as a scope
/// optionally swallows warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Multiplier {
    pub multiply_by: i64,
    pub suppress_warnings: bool,
}

impl Default for Multiplier {
    fn default() -> Self {
        Self {
            multiply_by: 2,
            suppress_warnings: false,
        }
    }
}

impl Multiplier {
    pub fn new(multiply_by: i64) -> Self {
        Self {
            multiply_by,
            ..Self::default()
        }
    }

    pub fn suppress_warnings(mut self, on: bool) -> Self {
        self.suppress_warnings = on;
        self
    }
}

impl ContextDecorator for Multiplier {
    type Error = Raised;

    fn exit(&mut self, failure: Option<Failure<'_, Raised>>) -> Exit {
        match failure {
            Some(Failure::Error(Raised::Warning(msg))) if self.suppress_warnings => {
                debug!(%msg, "warning swallowed");
                Exit::Suppress
            }
            _ => Exit::Propagate,
        }
    }
}

impl Apply<i64> for Multiplier {
    type Output = i64;
    fn apply(&mut self, result: i64) -> Result<i64, Raised> {
        self.multiply_by.checked_mul(result).ok_or_else(|| {
            Raised::Error(format!("overflow: {} * {result}", self.multiply_by))
        })
    }
}

impl Apply<f64> for Multiplier {
    type Output = f64;
    fn apply(&mut self, result: f64) -> Result<f64, Raised> {
        Ok(self.multiply_by as f64 * result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn defaults() {
        let m = Multiplier::default();
        assert_eq!(m.multiply_by, 2);
        assert!(!m.suppress_warnings);
    }

    #[test]
    fn configure_fills_missing_keys() {
        let m = Multiplier::configure(json!({"suppress_warnings": true})).unwrap();
        assert_eq!(m, Multiplier::new(2).suppress_warnings(true));
    }

    #[test]
    fn configure_rejects_unknown_keys() {
        let err = Multiplier::configure(json!({"divide_by": 3})).unwrap_err();
        assert!(err.to_string().starts_with("invalid configuration:"), "got {err}");
    }

    #[test]
    fn errors_are_never_swallowed() {
        let mut m = Multiplier::default().suppress_warnings(true);
        let out = m.scope(|_| Err::<(), _>(Raised::Error("disk full".into())));
        assert_eq!(out, Err(Raised::Error("disk full".into())));
    }

    #[test]
    fn floats_are_scaled_too() {
        let mut half = Multiplier::new(3).decorate(|x: f64| x / 2.0);
        assert_eq!(half.call(1.0), Ok(Some(1.5)));
    }

    #[test]
    fn overflow_is_reported_not_panicked() {
        let big = i64::MAX / 2 + 1;
        let mut doubled = Multiplier::default().decorate(|x: i64| x);
        assert_eq!(
            doubled.call(big),
            Err(Raised::Error(format!("overflow: 2 * {big}")))
        );
        assert_eq!(doubled.call(i64::MAX / 2), Ok(Some(i64::MAX - 1)));
    }

    #[test]
    fn overflow_is_not_a_suppressible_warning() {
        let mut doubled = Multiplier::default()
            .suppress_warnings(true)
            .decorate(|x: i64| x);
        assert!(matches!(doubled.call(i64::MIN), Err(Raised::Error(_))));
    }
}
