//! Common result types.

/// Application error type.
pub type Err = anyhow::Error;
/// Application result type.
pub type Res<T> = Result<T, Err>;
/// Result of an operation with no value.
pub type Void = Res<()>;
