use super::bitcoin::base58_size;
use core::hash::Hash;

/// A trait for integers that can be encoded to and decoded from little-endian
/// bytes.
///
/// Tokens carry the packed integer least-significant byte first, so the low
/// fields of an ID (the shard id) lead the base58 string.
pub trait LeBytes: Sized {
    const SIZE: usize;
    const BASE58_SIZE: usize;
    type ByteArray: AsRef<[u8]>
        + AsMut<[u8]>
        + core::fmt::Debug
        + Default
        + Copy
        + PartialEq
        + Eq
        + PartialOrd
        + Ord
        + Hash;
    type Base58Array: AsRef<[u8]>
        + AsMut<[u8]>
        + core::fmt::Debug
        + Default
        + Copy
        + PartialEq
        + Eq
        + PartialOrd
        + Ord
        + Hash;

    fn to_le_bytes(self) -> Self::ByteArray;
    fn from_le_bytes(bytes: Self::ByteArray) -> Self;
}

macro_rules! impl_le_bytes {
    ($($int:ty),*) => {
        $(
            impl LeBytes for $int {
                const SIZE: usize = core::mem::size_of::<$int>();
                const BASE58_SIZE: usize = base58_size(Self::SIZE);

                type ByteArray = [u8; Self::SIZE];
                type Base58Array = [u8; Self::BASE58_SIZE];

                fn to_le_bytes(self) -> Self::ByteArray {
                    self.to_le_bytes()
                }

                fn from_le_bytes(bytes: Self::ByteArray) -> Self {
                    Self::from_le_bytes(bytes)
                }
            }
        )*
    };
}

impl_le_bytes!(u32, u64, u128);
