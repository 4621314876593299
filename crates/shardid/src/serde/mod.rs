mod error;
mod uid;

pub use error::*;
pub use uid::*;
