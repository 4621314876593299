use super::{Error, LeBytes, decode_base58, encode_base58};
use crate::{Id, ShardedId};
use core::fmt;
use core::marker::PhantomData;

/// Extension trait for base58 encoding and decoding of sharded ID types.
///
/// The packed integer is serialized little-endian and rendered with the
/// Bitcoin base58 alphabet, producing a short, URL-safe token with no
/// visually ambiguous characters. Token length varies with the value.
pub trait Base58UidExt: ShardedId
where
    Self::Ty: LeBytes,
{
    /// Returns a stack-allocated, zero-initialized buffer large enough for any
    /// token of this ID type.
    ///
    /// See also: [`Base58UidExt::encode_to_buf`] for usage.
    #[must_use]
    fn buf() -> <<Self as Id>::Ty as LeBytes>::Base58Array {
        <<Self as Id>::Ty as LeBytes>::Base58Array::default()
    }

    /// Longest input [`Base58UidExt::decode`] will look at: twice the longest
    /// token this ID type can produce. Decoding is quadratic in the input
    /// length, so anything longer is rejected before any digit is read.
    #[must_use]
    fn max_token_len() -> usize {
        2 * <<Self as Id>::Ty as LeBytes>::BASE58_SIZE
    }

    /// Returns a formatter containing the base58 token of the ID.
    ///
    /// The formatter is a lightweight, zero-allocation view over an internal
    /// buffer that implements [`core::fmt::Display`] and [`AsRef<str>`].
    ///
    /// # Example
    /// ```
    /// use shardid::{Base58UidExt, Uid};
    ///
    /// let id = Uid::from(1, 2, 3);
    /// assert_eq!(id.encode(), "W764HYc3Jw");
    /// ```
    fn encode(&self) -> Base58UidFormatter<Self> {
        Base58UidFormatter::new(self)
    }

    /// Encodes this ID into the provided buffer without heap allocation and
    /// returns a formatter view over the written part of the buffer.
    ///
    /// # Example
    /// ```
    /// use shardid::{Base58UidExt, Uid};
    ///
    /// let id = Uid::from(1, 2, 3);
    /// let mut buf = Uid::buf();
    /// let token = id.encode_to_buf(&mut buf);
    /// assert_eq!(token, "W764HYc3Jw");
    /// ```
    fn encode_to_buf<'buf>(
        &self,
        buf: &'buf mut <<Self as Id>::Ty as LeBytes>::Base58Array,
    ) -> Base58UidFormatterRef<'buf, Self> {
        Base58UidFormatterRef::new(self, buf)
    }

    /// Decodes a base58 token back into an ID.
    ///
    /// Only the first [`LeBytes::SIZE`] decoded bytes are read; anything after
    /// them is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the token:
    /// - contains a byte outside the base58 alphabet
    /// - decodes to fewer bytes than the backing integer
    /// - decodes to a value below the ID type's validity floor, in which case
    ///   the rejected ID is returned inside the error
    ///
    /// # Example
    /// ```
    /// use shardid::{Base58Error, Base58UidExt, Uid};
    ///
    /// let id = Uid::decode("W764HYc3Jw").unwrap();
    /// assert_eq!((id.local_id(), id.object_type(), id.shard_id()), (1, 2, 3));
    ///
    /// // Eight zero bytes decode structurally but sit below the floor.
    /// let err = Uid::decode("11111111").unwrap_err();
    /// assert_eq!(err, Base58Error::DecodeBelowFloor { id: Uid::from_raw(0) });
    /// ```
    fn decode(s: impl AsRef<str>) -> Result<Self, Error<Self>> {
        let s = s.as_ref();
        let max = Self::max_token_len();
        if s.len() > max {
            return Err(Error::DecodeTooLong { len: s.len(), max });
        }

        let bytes = decode_base58(s)?;
        let size = <Self::Ty as LeBytes>::SIZE;
        if bytes.len() < size {
            return Err(Error::DecodeInvalidLen {
                len: bytes.len(),
                expected: size,
            });
        }

        let mut le = <Self::Ty as LeBytes>::ByteArray::default();
        le.as_mut().copy_from_slice(&bytes[..size]);
        let id = Self::from_raw(<Self::Ty as LeBytes>::from_le_bytes(le));
        if !id.is_valid() {
            return Err(Error::DecodeBelowFloor { id });
        }
        Ok(id)
    }
}

impl<ID> Base58UidExt for ID
where
    ID: ShardedId,
    ID::Ty: LeBytes,
{
}

fn encode_into<T>(id: &T, buf: &mut <T::Ty as LeBytes>::Base58Array) -> usize
where
    T: Base58UidExt,
    T::Ty: LeBytes,
{
    encode_base58(id.to_raw().to_le_bytes().as_ref(), buf.as_mut())
}

/// A reusable builder that owns the base58 buffer and formats an ID.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base58UidFormatter<T>
where
    T: Base58UidExt,
    T::Ty: LeBytes,
{
    _id: PhantomData<T>,
    buf: <T::Ty as LeBytes>::Base58Array,
    len: usize,
}

impl<T: Base58UidExt> Base58UidFormatter<T>
where
    T::Ty: LeBytes,
{
    pub fn new(id: &T) -> Self {
        let mut buf = T::buf();
        let len = encode_into(id, &mut buf);
        Self {
            _id: PhantomData,
            buf,
            len,
        }
    }

    /// Returns a `&str` view of the base58 token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `self.buf[..self.len]` holds only base58 ASCII characters
        unsafe { core::str::from_utf8_unchecked(&self.buf.as_ref()[..self.len]) }
    }

    /// Returns an allocated `String` of the base58 token.
    #[must_use]
    pub fn as_string(&self) -> String {
        self.as_str().to_owned()
    }

    /// Returns the number of characters in the token.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the token is empty, which no integer-backed ID
    /// produces.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: Base58UidExt> fmt::Display for Base58UidFormatter<T>
where
    T::Ty: LeBytes,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: Base58UidExt> AsRef<str> for Base58UidFormatter<T>
where
    T::Ty: LeBytes,
{
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T: Base58UidExt> PartialEq<str> for Base58UidFormatter<T>
where
    T::Ty: LeBytes,
{
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<T: Base58UidExt> PartialEq<&str> for Base58UidFormatter<T>
where
    T::Ty: LeBytes,
{
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<T: Base58UidExt> PartialEq<String> for Base58UidFormatter<T>
where
    T::Ty: LeBytes,
{
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other.as_str()
    }
}

/// A builder that borrows a user-supplied buffer for base58 formatting.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base58UidFormatterRef<'a, T>
where
    T: Base58UidExt,
    T::Ty: LeBytes,
{
    _id: PhantomData<T>,
    buf: &'a <T::Ty as LeBytes>::Base58Array,
    len: usize,
}

impl<'a, T: Base58UidExt> Base58UidFormatterRef<'a, T>
where
    T::Ty: LeBytes,
{
    pub fn new(id: &T, buf: &'a mut <T::Ty as LeBytes>::Base58Array) -> Self {
        let len = encode_into(id, buf);
        Self {
            _id: PhantomData,
            buf,
            len,
        }
    }

    /// Returns a `&str` view of the base58 token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `self.buf[..self.len]` holds only base58 ASCII characters
        unsafe { core::str::from_utf8_unchecked(&self.buf.as_ref()[..self.len]) }
    }

    /// Returns an allocated `String` of the base58 token.
    #[must_use]
    pub fn as_string(&self) -> String {
        self.as_str().to_owned()
    }

    /// Returns the number of characters written to the borrowed buffer.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: Base58UidExt> fmt::Display for Base58UidFormatterRef<'_, T>
where
    T::Ty: LeBytes,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: Base58UidExt> AsRef<str> for Base58UidFormatterRef<'_, T>
where
    T::Ty: LeBytes,
{
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T: Base58UidExt> PartialEq<str> for Base58UidFormatterRef<'_, T>
where
    T::Ty: LeBytes,
{
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<T: Base58UidExt> PartialEq<&str> for Base58UidFormatterRef<'_, T>
where
    T::Ty: LeBytes,
{
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<T: Base58UidExt> PartialEq<String> for Base58UidFormatterRef<'_, T>
where
    T::Ty: LeBytes,
{
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other.as_str()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Base58Error, Base58UidExt, Uid};

    #[test]
    fn uid_known() {
        let id = Uid::from(1, 2, 3);
        let encoded = id.encode();
        assert_eq!(encoded, "W764HYc3Jw");
        assert_eq!(encoded.len(), 10);
        let decoded = Uid::decode(encoded).unwrap();
        assert_eq!(decoded, id);
    }

    #[test]
    fn uid_max() {
        let id = Uid::from(Uid::max_local_id(), Uid::max_object_type(), Uid::max_shard_id());
        let encoded = id.encode();
        assert_eq!(encoded, "jpXCZedGfVQ");
        let decoded = Uid::decode(&encoded).unwrap();
        assert_eq!(decoded.local_id(), Uid::max_local_id());
        assert_eq!(decoded.object_type(), Uid::max_object_type());
        assert_eq!(decoded.shard_id(), Uid::max_shard_id());
    }

    #[test]
    fn uid_leading_zero_bytes() {
        // A zero shard id leaves the low bytes empty, which base58 renders as
        // leading '1's.
        let id = Uid::from(1, 0, 0);
        assert_eq!(id.encode(), "1112ohWHHR");
        assert_eq!(Uid::decode("1112ohWHHR").unwrap(), id);

        let id = Uid::from(0, 1, 0);
        assert_eq!(id.encode(), "112zXhJy7V");
        assert_eq!(Uid::decode("112zXhJy7V").unwrap(), id);
    }

    #[test]
    fn encode_to_buf_matches_encode() {
        let id = Uid::from(42, 7, 9);
        let mut buf = Uid::buf();
        let formatter = id.encode_to_buf(&mut buf);
        assert_eq!(formatter, "2WKJP2Gd2as");
        assert_eq!(formatter.len(), 11);
        assert!(!formatter.is_empty());
        assert_eq!(formatter.as_string(), id.encode().as_string());
        assert_eq!(&buf[..11], b"2WKJP2Gd2as");
    }

    #[test]
    fn decode_rejects_below_floor() {
        assert_eq!(
            Uid::decode("11111111").unwrap_err(),
            Base58Error::DecodeBelowFloor { id: Uid::from_raw(0) }
        );
        assert_eq!(
            Uid::decode("Ahg1opVcGX").unwrap_err(),
            Base58Error::DecodeBelowFloor { id: Uid::from_raw(1) }
        );
        assert_eq!(
            Uid::decode("jpV2aRfgDvP").unwrap_err(),
            Base58Error::DecodeBelowFloor {
                id: Uid::from_raw((1 << 18) - 1)
            }
        );
    }

    #[test]
    fn decode_accepts_floor() {
        let id = Uid::decode("112zXhJy7V").unwrap();
        assert_eq!(id.to_raw(), 1 << 18);
    }

    #[test]
    fn decode_rejects_short_input() {
        assert_eq!(
            Uid::decode("").unwrap_err(),
            Base58Error::DecodeInvalidLen { len: 0, expected: 8 }
        );
        assert_eq!(
            Uid::decode("2").unwrap_err(),
            Base58Error::DecodeInvalidLen { len: 1, expected: 8 }
        );
        assert_eq!(
            Uid::decode("1111111").unwrap_err(),
            Base58Error::DecodeInvalidLen { len: 7, expected: 8 }
        );
        assert_eq!(
            Uid::decode("Ahg1opVcGW").unwrap_err(),
            Base58Error::DecodeInvalidLen { len: 7, expected: 8 }
        );
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        // Nine bytes: the little-endian encoding of (1, 2, 3) plus 0x07.
        let id = Uid::decode("3DTsKW2VfC9U").unwrap();
        assert_eq!(id, Uid::from(1, 2, 3));
    }

    #[test]
    fn decode_caps_input_length() {
        assert_eq!(Uid::max_token_len(), 24);

        // At the cap the token is still decoded (and here rejected on value).
        assert_eq!(
            Uid::decode("1".repeat(24)).unwrap_err(),
            Base58Error::DecodeBelowFloor { id: Uid::from_raw(0) }
        );
        assert_eq!(
            Uid::decode("1".repeat(25)).unwrap_err(),
            Base58Error::DecodeTooLong { len: 25, max: 24 }
        );
        assert_eq!(
            Uid::decode("z".repeat(10_000)).unwrap_err(),
            Base58Error::DecodeTooLong {
                len: 10_000,
                max: 24
            }
        );
    }

    #[test]
    fn decode_rejects_invalid_character() {
        assert_eq!(
            Uid::decode("W764HYc3J0").unwrap_err(),
            Base58Error::DecodeInvalidAscii {
                byte: b'0',
                index: 9,
            }
        );
    }

    #[test]
    fn uid_try_from_and_from_str() {
        use core::str::FromStr;

        let id = Uid::try_from("W764HYc3Jw").unwrap();
        assert_eq!(id, Uid::from(1, 2, 3));
        let id = Uid::from_str("W764HYc3Jw").unwrap();
        assert_eq!(id, Uid::from(1, 2, 3));
        assert!(Uid::from_str("11111111").is_err());
    }

    #[test]
    fn uid_display_and_string() {
        let id = Uid::from(1, 2, 3);
        assert_eq!(format!("{id}"), "W764HYc3Jw");
        assert_eq!(id.to_string(), "W764HYc3Jw");
        assert_eq!(String::from(id), "W764HYc3Jw");
        assert_eq!(String::from(&id), "W764HYc3Jw");
        assert!(id == "W764HYc3Jw");
        assert!("W764HYc3Jw" == id);
        assert!(id != "1112ohWHHR");
        assert!(id != "not base58!");
    }
}
