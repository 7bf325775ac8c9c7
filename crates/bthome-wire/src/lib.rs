#![warn(clippy::pedantic)]

pub mod error;
pub mod header;
pub mod hexstr;
pub mod int;

pub use error::WireError;
pub use header::{HeaderFlags, PacketHeader, SERVICE_UUID};
