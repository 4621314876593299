#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "base58")]
pub mod base58;
#[cfg(feature = "base58")]
mod codec;
mod error;
pub mod id;
#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "session")]
pub mod session;

#[cfg(feature = "base58")]
pub use crate::base58::{
    Base58UidExt, Base58UidFormatter, Base58UidFormatterRef, Error as Base58Error, LeBytes,
};
#[cfg(feature = "base58")]
pub use crate::codec::*;
pub use crate::error::*;
pub use crate::id::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;

#[doc(hidden)]
pub mod __internal {
    pub use std::string::String;
}
