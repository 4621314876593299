use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod as_native_uid {
    use super::{Deserialize, Deserializer, Serialize, Serializer};
    use crate::{SerdeError, ShardedId};

    /// Serialize a sharded ID as its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<ID, S>(id: &ID, s: S) -> Result<S::Ok, S::Error>
    where
        ID: ShardedId,
        ID::Ty: Serialize,
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    /// Deserialize a sharded ID from its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The deserialized value is below the validity floor of the ID type
    pub fn deserialize<'de, ID, D>(d: D) -> Result<ID, D::Error>
    where
        ID: ShardedId,
        ID::Ty: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let n = <ID::Ty>::deserialize(d)?;
        let id = ID::from_raw(n);
        if !id.is_valid() {
            return Err(serde::de::Error::custom(SerdeError::DecodeBelowFloor { id }));
        }
        Ok(id)
    }
}

#[cfg_attr(docsrs, doc(cfg(all(feature = "serde", feature = "base58"))))]
#[cfg(feature = "base58")]
pub mod as_base58_uid {
    use super::{Deserializer, Serializer};
    use crate::{Base58UidExt, LeBytes, SerdeError};

    /// Serialize a sharded ID as its base58 token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<ID, S>(id: &ID, s: S) -> Result<S::Ok, S::Error>
    where
        ID: Base58UidExt,
        ID::Ty: LeBytes,
        S: Serializer,
    {
        s.serialize_str(id.encode().as_str())
    }

    /// Deserialize a sharded ID from its base58 token.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The string is not a valid token (invalid byte, too short, or below
    ///   the validity floor)
    pub fn deserialize<'de, ID, D>(d: D) -> Result<ID, D::Error>
    where
        ID: Base58UidExt,
        ID::Ty: LeBytes,
        D: Deserializer<'de>,
    {
        struct Base58Visitor<ID>(core::marker::PhantomData<ID>);

        impl<ID> serde::de::Visitor<'_> for Base58Visitor<ID>
        where
            ID: Base58UidExt,
            ID::Ty: LeBytes,
        {
            type Value = ID;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a base58 encoded sharded id")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                ID::decode(v).map_err(|e| serde::de::Error::custom(SerdeError::Base58Error(e)))
            }
        }

        d.deserialize_str(Base58Visitor(core::marker::PhantomData))
    }
}
