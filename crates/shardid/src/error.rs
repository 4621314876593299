use core::fmt;

/// A result type defaulting to the crate-wide [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Names one of the three packed fields of a sharded identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    LocalId,
    ObjectType,
    ShardId,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LocalId => "local id",
            Self::ObjectType => "object type",
            Self::ShardId => "shard id",
        })
    }
}

/// All possible errors that `shardid` can produce.
///
/// The generic parameter `E` is the identifier type carried by decode
/// failures so callers can inspect the rejected value. Encode-side errors never
/// carry one, which is why it defaults to [`core::convert::Infallible`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error<E = core::convert::Infallible> {
    /// A field does not fit in the bits the layout reserves for it.
    #[error("{component} {value} exceeds the maximum of {max}")]
    ComponentOverflow {
        component: Component,
        value: u128,
        max: u128,
    },

    /// The packed value is below the layout's validity floor, so no token
    /// minted from it would ever decode.
    #[error("packed value {raw} is below the validity floor")]
    BelowValidityFloor { raw: u128 },

    /// A token failed to decode.
    #[cfg_attr(docsrs, doc(cfg(feature = "base58")))]
    #[cfg(feature = "base58")]
    #[error(transparent)]
    Base58(#[from] crate::base58::Error<E>),

    /// Keeps `E` in use when the `base58` feature is disabled. Never
    /// constructed.
    #[cfg(not(feature = "base58"))]
    #[doc(hidden)]
    #[error("unreachable")]
    __Phantom(core::marker::PhantomData<E>),
}
