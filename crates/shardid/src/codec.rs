//! Stateless entry points over the default [`Uid`] layout.
//!
//! These are the functions an authentication layer calls: [`encode`] when it
//! mints a token subject and [`decode_local_id`] when it resolves one back to
//! a row identifier. Every call is pure and independent, so they can be used
//! from any number of threads without coordination.

use crate::{Base58Error, Base58UidExt, Result, ShardedId, Uid};

/// Error returned for any malformed token.
pub type DecodeError = Base58Error<Uid>;

/// Packs the three components into a [`Uid`] and returns its base58 token.
///
/// # Errors
///
/// - [`crate::Error::ComponentOverflow`] if a component does not fit its field
///   (`local_id < 2^36`, `object_type <= 1023`, `shard_id <= 262143`)
/// - [`crate::Error::BelowValidityFloor`] if `local_id` and `object_type` are
///   both zero, since such a token would never decode
///
/// # Example
/// ```
/// let token = shardid::encode(1, 2, 3).unwrap();
/// assert_eq!(token, "W764HYc3Jw");
/// ```
pub fn encode(local_id: u64, object_type: u64, shard_id: u64) -> Result<String> {
    let id = Uid::try_from_components(local_id, object_type, shard_id)?;
    Ok(id.encode().as_string())
}

/// Decodes a base58 token into a [`Uid`].
///
/// # Errors
///
/// Returns a [`DecodeError`] if the token is longer than 24 characters, holds
/// a byte outside the base58 alphabet, decodes to fewer than 8 bytes, or
/// decodes to a value below [`Uid::VALIDITY_FLOOR`].
pub fn decode(token: &str) -> Result<Uid, DecodeError> {
    Uid::decode(token)
}

/// Decodes a base58 token and returns only its local id.
///
/// # Errors
///
/// Same as [`decode`].
pub fn decode_local_id(token: &str) -> Result<u64, DecodeError> {
    decode(token).map(|id| id.local_id())
}
