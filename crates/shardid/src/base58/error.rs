/// Errors that can occur while decoding a base58 token.
///
/// This error type is generic over the decoded ID type `E`, which allows
/// including the decoded ID when it fails validation. This can help callers
/// inspect or log rejected IDs during error handling.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, thiserror::Error)]
#[non_exhaustive]
pub enum Error<E> {
    /// A byte outside the base58 alphabet.
    #[error("invalid base58 byte {byte:#04x} at index {index}")]
    DecodeInvalidAscii { byte: u8, index: usize },

    /// The token decoded to fewer bytes than the backing integer needs.
    #[error("decoded {len} bytes, expected at least {expected}")]
    DecodeInvalidLen { len: usize, expected: usize },

    /// The token is longer than any token of the ID type could reasonably be.
    #[error("token is {len} characters long, at most {max} are accepted")]
    DecodeTooLong { len: usize, max: usize },

    /// The decoded value is below the validity floor of the ID type.
    #[error("decoded value is below the validity floor: {id:?}")]
    DecodeBelowFloor {
        /// The decoded ID value, which failed validation.
        id: E,
    },
}
