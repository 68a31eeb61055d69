use thiserror::Error;

/// Failures of [`crate::stringify`], mirroring the `TypeError`s thrown by
/// `JSON.stringify`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StringifyError {
    #[error("Do not know how to serialize a BigInt")]
    BigInt,

    #[error("Converting circular structure to JSON")]
    Circular,

    /// A `toJSON` method threw; carries the text of the thrown value.
    #[error("toJSON threw: {0}")]
    Thrown(String),
}
