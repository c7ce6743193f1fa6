/// Custom Result type for fasta operations, wrapping the custom [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fasta library, encompassing all possible error
/// cases that can occur while scanning or combining sequence records.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Standard I/O errors from the underlying byte source
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding errors raised while interpreting a header line
    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),

    /// Concatenation was requested over an empty set of sequences
    #[error("cannot concatenate an empty set of sequences")]
    EmptyConcatenation,
}
