use ctxdeco_extended as cde;
use cde::{Arg, ContextDecorator, DecoError, Multiplier};

type Callable = fn(i64) -> i64;

#[test]
fn test_integer_argument_is_rejected() {
    let res = Multiplier::construct(Some(Arg::<Callable>::value(1)));
    assert!(matches!(res, Err(DecoError::InvalidArgument(_))));
}

#[test]
fn test_string_argument_is_rejected() {
    let res = Multiplier::construct(Some(Arg::<Callable>::value("string")));
    assert!(matches!(res, Err(DecoError::InvalidArgument(_))));
}

#[test]
fn test_no_argument_configures_defaults() {
    let res = Multiplier::construct(None::<Arg<Callable>>).unwrap();
    assert_eq!(res.into_configured(), Some(Multiplier::default()));
}

#[test]
fn test_bad_config_text() {
    let res = cde::config::configure_str::<Multiplier>(r#"{"multiply_by": "three"}"#);
    assert!(matches!(res, Err(DecoError::Config(_))));
}
