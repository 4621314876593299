use crate::{Component, Error, Result, id::Id};

/// Trait for layout-compatible sharded identifiers.
///
/// A sharded identifier packs a `local_id`, an `object_type` tag and a
/// `shard_id` into one fixed-size integer. Types implementing `ShardedId`
/// expose construction, validation and field extraction over that packed
/// integer.
pub trait ShardedId: Id {
    /// Returns the local id portion of the ID.
    fn local_id(&self) -> Self::Ty;

    /// Returns the object type portion of the ID.
    fn object_type(&self) -> Self::Ty;

    /// Returns the shard id portion of the ID.
    fn shard_id(&self) -> Self::Ty;

    /// Returns the maximum possible value for the local id field.
    fn max_local_id() -> Self::Ty;

    /// Returns the maximum possible value for the object type field.
    fn max_object_type() -> Self::Ty;

    /// Returns the maximum possible value for the shard id field.
    fn max_shard_id() -> Self::Ty;

    /// Returns the lowest raw value considered a valid identifier.
    fn validity_floor() -> Self::Ty;

    /// Constructs a new ID from its components.
    ///
    /// Out-of-range components are masked to their field width. Use
    /// [`ShardedId::try_from_components`] when the inputs are not already
    /// known to fit.
    #[must_use]
    fn from_components(local_id: Self::Ty, object_type: Self::Ty, shard_id: Self::Ty) -> Self;

    /// Constructs a new ID from its components, rejecting any component that
    /// overflows its field and any combination that packs below
    /// [`ShardedId::validity_floor`].
    ///
    /// # Errors
    ///
    /// - [`Error::ComponentOverflow`] naming the first offending component
    /// - [`Error::BelowValidityFloor`] when both `local_id` and `object_type`
    ///   are zero
    fn try_from_components(
        local_id: Self::Ty,
        object_type: Self::Ty,
        shard_id: Self::Ty,
    ) -> Result<Self> {
        check_component(Component::LocalId, local_id, Self::max_local_id())?;
        check_component(Component::ObjectType, object_type, Self::max_object_type())?;
        check_component(Component::ShardId, shard_id, Self::max_shard_id())?;

        let id = Self::from_components(local_id, object_type, shard_id);
        if !id.is_valid() {
            return Err(Error::BelowValidityFloor {
                raw: id.to_raw().into(),
            });
        }
        Ok(id)
    }

    /// Returns `true` if the packed value is at or above the validity floor.
    fn is_valid(&self) -> bool {
        self.to_raw() >= Self::validity_floor()
    }
}

fn check_component<T>(component: Component, value: T, max: T) -> Result<()>
where
    T: Ord + Into<u128>,
{
    if value > max {
        return Err(Error::ComponentOverflow {
            component,
            value: value.into(),
            max: max.into(),
        });
    }
    Ok(())
}

/// A macro for defining a bit layout for a sharded identifier using three
/// required components: `local_id`, `object_type`, and `shard_id`.
///
/// These components are always laid out from **most significant bit (MSB)** to
/// **least significant bit (LSB)** - in that exact order.
///
/// - The first field (`local_id`) occupies the highest bits.
/// - The last field (`shard_id`) occupies the lowest bits.
/// - The total number of bits **must exactly equal** the size of the backing
///   integer type (`u64`, `u128`, etc.). If it doesn't, the macro will trigger
///   a compile-time assertion failure.
///
/// The validity floor of the generated type is `1 << OBJECT_TYPE_SHIFT`: a
/// packed value whose `local_id` and `object_type` are both zero is treated as
/// malformed.
///
/// ```text
/// define_sharded_id!(
///     <TypeName>, <IntegerType>,
///     local_id: <bits>,
///     object_type: <bits>,
///     shard_id: <bits>
/// );
/// ```
///
/// ## Example: a layout with a wider shard space
/// ```rust
/// use shardid::define_sharded_id;
///
/// define_sharded_id!(
///     WideShardId, u64,
///     local_id: 32,
///     object_type: 8,
///     shard_id: 24
/// );
///
/// let id = WideShardId::from(7, 1, 65_536);
/// assert_eq!(id.local_id(), 7);
/// assert_eq!(id.shard_id(), 65_536);
/// ```
#[macro_export]
macro_rules! define_sharded_id {
    (
        $(#[$meta:meta])*
        $name:ident, $int:ty,
        local_id: $local_id_bits:expr,
        object_type: $object_type_bits:expr,
        shard_id: $shard_id_bits:expr
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name {
            id: $int,
        }

        const _: () = {
            // Compile-time check: total bit width _must_ equal the backing
            // type. This is to avoid aliasing surprises.
            assert!(
                $local_id_bits + $object_type_bits + $shard_id_bits == <$int>::BITS,
                "Layout must match underlying type width"
            );
        };

        impl $name {
            pub const LOCAL_ID_BITS: $int = $local_id_bits;
            pub const OBJECT_TYPE_BITS: $int = $object_type_bits;
            pub const SHARD_ID_BITS: $int = $shard_id_bits;

            pub const SHARD_ID_SHIFT: $int = 0;
            pub const OBJECT_TYPE_SHIFT: $int = Self::SHARD_ID_SHIFT + Self::SHARD_ID_BITS;
            pub const LOCAL_ID_SHIFT: $int = Self::OBJECT_TYPE_SHIFT + Self::OBJECT_TYPE_BITS;

            pub const LOCAL_ID_MASK: $int = ((1 << Self::LOCAL_ID_BITS) - 1);
            pub const OBJECT_TYPE_MASK: $int = ((1 << Self::OBJECT_TYPE_BITS) - 1);
            pub const SHARD_ID_MASK: $int = ((1 << Self::SHARD_ID_BITS) - 1);

            /// Lowest raw value accepted as an identifier.
            pub const VALIDITY_FLOOR: $int = 1 << Self::OBJECT_TYPE_SHIFT;

            /// Packs the three components, masking each to its field width.
            #[must_use]
            pub const fn from(local_id: $int, object_type: $int, shard_id: $int) -> Self {
                let l = (local_id & Self::LOCAL_ID_MASK) << Self::LOCAL_ID_SHIFT;
                let t = (object_type & Self::OBJECT_TYPE_MASK) << Self::OBJECT_TYPE_SHIFT;
                let s = (shard_id & Self::SHARD_ID_MASK) << Self::SHARD_ID_SHIFT;
                Self { id: l | t | s }
            }

            /// Extracts the local id from the packed ID.
            #[must_use]
            pub const fn local_id(&self) -> $int {
                (self.id >> Self::LOCAL_ID_SHIFT) & Self::LOCAL_ID_MASK
            }
            /// Extracts the object type from the packed ID.
            #[must_use]
            pub const fn object_type(&self) -> $int {
                (self.id >> Self::OBJECT_TYPE_SHIFT) & Self::OBJECT_TYPE_MASK
            }
            /// Extracts the shard id from the packed ID.
            #[must_use]
            pub const fn shard_id(&self) -> $int {
                (self.id >> Self::SHARD_ID_SHIFT) & Self::SHARD_ID_MASK
            }
            #[must_use]
            pub const fn max_local_id() -> $int {
                Self::LOCAL_ID_MASK
            }
            #[must_use]
            pub const fn max_object_type() -> $int {
                Self::OBJECT_TYPE_MASK
            }
            #[must_use]
            pub const fn max_shard_id() -> $int {
                Self::SHARD_ID_MASK
            }

            /// Returns `true` if the packed value is at or above
            /// [`Self::VALIDITY_FLOOR`].
            #[must_use]
            pub const fn is_valid(&self) -> bool {
                self.id >= Self::VALIDITY_FLOOR
            }

            /// Converts this type into its raw type representation
            #[must_use]
            pub const fn to_raw(&self) -> $int {
                self.id
            }

            /// Converts a raw type into this type
            #[must_use]
            pub const fn from_raw(raw: $int) -> Self {
                Self { id: raw }
            }
        }

        impl $crate::id::Id for $name {
            type Ty = $int;

            fn to_raw(&self) -> Self::Ty {
                self.to_raw()
            }

            fn from_raw(raw: Self::Ty) -> Self {
                Self::from_raw(raw)
            }
        }

        impl $crate::id::ShardedId for $name {
            fn local_id(&self) -> Self::Ty {
                self.local_id()
            }

            fn object_type(&self) -> Self::Ty {
                self.object_type()
            }

            fn shard_id(&self) -> Self::Ty {
                self.shard_id()
            }

            fn max_local_id() -> Self::Ty {
                Self::LOCAL_ID_MASK
            }

            fn max_object_type() -> Self::Ty {
                Self::OBJECT_TYPE_MASK
            }

            fn max_shard_id() -> Self::Ty {
                Self::SHARD_ID_MASK
            }

            fn validity_floor() -> Self::Ty {
                Self::VALIDITY_FLOOR
            }

            fn from_components(local_id: $int, object_type: $int, shard_id: $int) -> Self {
                debug_assert!(local_id <= Self::LOCAL_ID_MASK, "local_id overflow");
                debug_assert!(object_type <= Self::OBJECT_TYPE_MASK, "object_type overflow");
                debug_assert!(shard_id <= Self::SHARD_ID_MASK, "shard_id overflow");
                Self::from(local_id, object_type, shard_id)
            }
        }

        $crate::cfg_base58! {
            impl core::fmt::Display for $name {
                fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    use $crate::base58::Base58UidExt;
                    core::fmt::Display::fmt(&self.encode(), f)
                }
            }
            impl PartialEq<str> for $name {
                fn eq(&self, other: &str) -> bool {
                    use $crate::base58::Base58UidExt;
                    Self::decode(other).map(|id| id == *self).unwrap_or(false)
                }
            }
            impl PartialEq<&str> for $name {
                fn eq(&self, other: &&str) -> bool {
                    self == *other
                }
            }
            impl PartialEq<$name> for &str {
                fn eq(&self, other: &$name) -> bool {
                    other == *self
                }
            }
            impl From<$name> for $crate::__internal::String {
                fn from(val: $name) -> Self {
                    use $crate::base58::Base58UidExt;
                    val.encode().as_string()
                }
            }
            impl From<&$name> for $crate::__internal::String {
                fn from(val: &$name) -> Self {
                    use $crate::base58::Base58UidExt;
                    val.encode().as_string()
                }
            }

            impl core::convert::TryFrom<&str> for $name {
                type Error = $crate::base58::Error<$name>;

                fn try_from(s: &str) -> core::result::Result<Self, Self::Error> {
                    use $crate::base58::Base58UidExt;
                    Self::decode(s)
                }
            }

            impl core::str::FromStr for $name {
                type Err = $crate::base58::Error<$name>;

                fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
                    use $crate::base58::Base58UidExt;
                    Self::decode(s)
                }
            }
        }

        $crate::cfg_not_base58! {
            impl core::fmt::Display for $name {
                fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    core::fmt::Display::fmt(&self.id, f)
                }
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let full = core::any::type_name::<Self>();
                let name = full.rsplit("::").next().unwrap_or(full);
                let mut dbg = f.debug_struct(name);
                dbg.field("id", &format_args!("{:} (0x{:x})", self.to_raw(), self.to_raw()));
                dbg.field("local_id", &format_args!("{:} (0x{:x})", self.local_id(), self.local_id()));
                dbg.field("object_type", &format_args!("{:} (0x{:x})", self.object_type(), self.object_type()));
                dbg.field("shard_id", &format_args!("{:} (0x{:x})", self.shard_id(), self.shard_id()));
                dbg.finish()
            }
        }
    };
}

define_sharded_id!(
    /// A 64-bit sharded identifier
    ///
    /// - 36 bits local id (the entity's own sequence number)
    /// - 10 bits object type (which kind of entity the local id refers to)
    /// - 18 bits shard id (the partition owning the entity)
    ///
    /// ```text
    ///  Bit Index:  63           28 27              18 17             0
    ///              +--------------+------------------+---------------+
    ///  Field:      | local id (36)| object type (10) | shard id (18) |
    ///              +--------------+------------------+---------------+
    ///              |<------ MSB ------- 64 bits ------- LSB -------->|
    /// ```
    ///
    /// Raw values below `2^18` carry no local id or object type and are never
    /// valid.
    Uid, u64,
    local_id: 36,
    object_type: 10,
    shard_id: 18
);
