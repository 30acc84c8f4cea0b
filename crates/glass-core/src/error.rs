use thiserror::Error;

/// Programmatic misuse of the parameter dispatch API.
///
/// Values coming from the control panel are already constrained, so these only
/// surface for hand-built `(field, value)` pairs such as CLI overrides.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("unknown parameter `{0}`")]
    UnknownField(String),
    #[error("`{field}` expects a {expected} value, got {got}")]
    WrongKind {
        field: &'static str,
        expected: &'static str,
        got: &'static str,
    },
    #[error("`{value}` is not a valid {kind}")]
    UnknownChoice { kind: &'static str, value: String },
    #[error("`{field}` must be a finite number")]
    NonFinite { field: &'static str },
    #[error("cannot read `{value}` as a value for `{field}`")]
    InvalidValue { field: &'static str, value: String },
}
