#![warn(clippy::pedantic)]

pub mod decoder;
pub mod error;
pub mod models;
pub mod vendor;

pub use decoder::{BtHomeDecoder, DecodedReadingSet};
pub use error::DecodeError;
pub use vendor::{SHELLY_COMPANY_ID, VendorData, VendorDecoder, VendorFlags};
