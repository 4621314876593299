mod bitcoin;
mod error;
mod interface;
mod le_bytes;

pub use bitcoin::{decode_base58, encode_base58};
pub use error::*;
pub use interface::*;
pub use le_bytes::*;
