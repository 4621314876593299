/// Errors that can occur while deserializing sharded IDs.
///
/// This error type is generic over the decoded ID type `E`, which allows
/// including the decoded ID when it fails validation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, thiserror::Error)]
#[non_exhaustive]
pub enum SerdeError<E> {
    /// The native integer is below the validity floor for the target ID type.
    #[error("decoded value is below the validity floor: {id:?}")]
    DecodeBelowFloor {
        /// The decoded ID value, which failed validation.
        id: E,
    },

    /// An error occurred during base58 decoding.
    #[cfg_attr(docsrs, doc(cfg(feature = "base58")))]
    #[cfg(feature = "base58")]
    #[error(transparent)]
    Base58Error(crate::base58::Error<E>),
}
