#![warn(clippy::pedantic)]

pub mod enums;
pub mod error;
pub mod fields;
pub mod table;
pub mod value;

pub use enums::{ButtonEvent, DimmerEventKind};
pub use error::TypeError;
pub use fields::{FieldDescriptor, FieldKind, FieldWidth};
pub use table::{FIELD_TABLE, lookup, validate_table};
pub use value::{ReadingValue, Readings};
