use thiserror::Error;

/// Errors surfaced by the field engine.
///
/// Construction is the only fallible operation; once a [`Field`] exists,
/// its operations cannot fail. Out-of-bounds coordinates passed to a
/// mutation are a caller bug and panic instead of returning an error.
///
/// [`Field`]: crate::Field
#[derive(Debug, Error)]
pub enum Error {
    /// Parameters that cannot produce a playable field.
    #[error("invalid field configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
