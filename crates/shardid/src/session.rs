//! Helpers for the authentication layer that embeds tokens as session
//! subjects.
//!
//! On login the layer mints a subject with [`SubjectCodec::mint`]; on every
//! authenticated request it resolves the subject back to a user record with
//! [`SubjectCodec::authenticate`]. Any malformed subject, or one whose user is
//! gone, surfaces as [`AuthError::Unauthenticated`] so the caller can reject
//! the request instead of failing it.
//!
//! The user store itself is external; it is reached through the [`UserStore`]
//! trait.

use crate::{Component, Error, Uid, decode, encode};
use core::fmt;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// An application enumeration of entity kinds sharing the identifier space
/// (e.g. member, company and admin accounts).
pub trait ObjectType: Copy + fmt::Debug {
    /// The 10-bit tag stored in the object type field.
    fn tag(self) -> u64;
}

/// Lookup of user records by local id, owned by the data layer.
pub trait UserStore {
    type User;

    fn find(&self, local_id: u64) -> Option<Self::User>;
}

impl<S: UserStore + ?Sized> UserStore for &S {
    type User = S::User;

    fn find(&self, local_id: u64) -> Option<Self::User> {
        (**self).find(local_id)
    }
}

/// Errors surfaced to the authentication layer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The subject is malformed, has the wrong kind, or names no user.
    #[error("unauthenticated")]
    Unauthenticated,

    /// A subject could not be minted from the given inputs.
    #[error("cannot mint subject: {0}")]
    Subject(#[from] Error),
}

/// Mints and resolves session subjects for one shard.
#[derive(Clone, Debug)]
pub struct SubjectCodec<S> {
    shard_id: u64,
    store: S,
}

impl<S: UserStore> SubjectCodec<S> {
    /// Creates a codec minting subjects for `shard_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentOverflow`] if `shard_id` does not fit the
    /// shard field.
    pub fn new(shard_id: u64, store: S) -> Result<Self, Error> {
        if shard_id > Uid::max_shard_id() {
            return Err(Error::ComponentOverflow {
                component: Component::ShardId,
                value: shard_id.into(),
                max: Uid::max_shard_id().into(),
            });
        }
        Ok(Self { shard_id, store })
    }

    pub const fn shard_id(&self) -> u64 {
        self.shard_id
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Mints the subject for `user_id` of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Subject`] if the user id or tag overflows its
    /// field, or if both are zero.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn mint<K: ObjectType>(&self, user_id: u64, kind: K) -> Result<String, AuthError> {
        Ok(encode(user_id, kind.tag(), self.shard_id)?)
    }

    /// Resolves a subject to its user record.
    ///
    /// Only subjects minted for this codec's shard are accepted; the store is
    /// assumed to hold that shard's users only.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unauthenticated`] if the subject does not decode,
    /// belongs to another shard, or the store has no user for it.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all))]
    pub fn authenticate(&self, subject: &str) -> Result<S::User, AuthError> {
        let id = self.decode_subject(subject)?;
        self.store
            .find(id.local_id())
            .ok_or(AuthError::Unauthenticated)
    }

    /// Resolves a subject to its user record, additionally requiring that it
    /// was minted for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unauthenticated`] if the subject does not decode,
    /// belongs to another shard, carries another kind's tag, or the store has
    /// no user for it.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self, subject)))]
    pub fn authenticate_as<K: ObjectType>(
        &self,
        subject: &str,
        kind: K,
    ) -> Result<S::User, AuthError> {
        let id = self.decode_subject(subject)?;
        if id.object_type() != kind.tag() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                expected = kind.tag(),
                actual = id.object_type(),
                "session subject has the wrong kind"
            );
            return Err(AuthError::Unauthenticated);
        }
        self.store
            .find(id.local_id())
            .ok_or(AuthError::Unauthenticated)
    }

    fn decode_subject(&self, subject: &str) -> Result<Uid, AuthError> {
        let id = decode(subject).map_err(|_err| {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %_err, "rejected session subject");
            AuthError::Unauthenticated
        })?;
        if id.shard_id() != self.shard_id {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                expected = self.shard_id,
                actual = id.shard_id(),
                "session subject belongs to another shard"
            );
            return Err(AuthError::Unauthenticated);
        }
        Ok(id)
    }
}
