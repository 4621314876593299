mod interface;
mod sharded;
mod utils;

pub use interface::*;
pub use sharded::*;
