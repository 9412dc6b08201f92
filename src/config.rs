use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::errors::Result;

/// Build a decorator from keyword arguments given as a JSON object,
/// e.g. `{"multiply_by": 3}`. Missing keys take the type's serde defaults.
pub fn configure<D: DeserializeOwned>(kwargs: Value) -> Result<D> {
    debug!(%kwargs, "configuring decorator");
    Ok(serde_json::from_value(kwargs)?)
}

/// Same as [`configure`], reading the keyword arguments from text.
pub fn configure_str<D: DeserializeOwned>(json: &str) -> Result<D> {
    let kwargs: Value = serde_json::from_str(json)?;
    configure(kwargs)
}
