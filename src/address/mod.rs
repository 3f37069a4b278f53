//! Address module - pubkey-hash addresses over Base58Check

mod address;
mod deps;
mod error;

pub use address::*;
pub use deps::*;
pub use error::*;
