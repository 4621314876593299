use core::fmt;
use core::hash::Hash;

/// A trait for types that wrap a primitive scalar identifier.
///
/// This is used to abstract over the raw scalar type behind an ID (e.g., `u64`,
/// `u128`).
pub trait Id:
    Copy + Clone + fmt::Display + PartialOrd + Ord + PartialEq + Eq + Hash + fmt::Debug
{
    /// Scalar type for all bit fields (typically `u64`)
    type Ty: Copy
        + Clone
        + Default
        + fmt::Debug
        + fmt::Display
        + Ord
        + PartialOrd
        + Eq
        + PartialEq
        + Hash
        // For error reporting
        + Into<u128>;

    /// Converts this type into its raw type representation
    fn to_raw(&self) -> Self::Ty;

    /// Converts a raw type into this type
    fn from_raw(raw: Self::Ty) -> Self;
}
