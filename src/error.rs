use thiserror::Error;

/// Rejected input to one of the fragment or quantifier factories.
///
/// Validation always happens when the value is constructed; a failed call
/// produces nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("A negative value was passed to the {method}() method, value must be >= 0")]
    NegativeCount { method: &'static str },
    #[error("A negative value was passed to the between() method, values must be >= 0")]
    NegativeBound,
    #[error("The 'from' argument value of {from} was larger than the 'to' argument value of {to}")]
    InvertedRange { from: i64, to: i64 },
    #[error("Bad octal value")]
    BadOctal,
    #[error("Bad hex value")]
    BadHex,
    #[error("Bad unicode value")]
    BadUnicode,
    #[error("Only letters are permitted for control characters")]
    NonLetterControl,
    #[error("Bad quantifier: {0:?}")]
    BadQuantifier(String),
}
