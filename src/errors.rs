/// Result type in spitz-stream
pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The read needs more bytes than are left in the view. The message is truncated or
    /// malformed and should be discarded as a whole.
    #[error("buffer underrun, need {needed} bytes but only {remaining} remaining")]
    BufferUnderrun { needed: usize, remaining: usize },
}
