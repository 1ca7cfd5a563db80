//! SDL rendering modules.

pub mod fields;
pub mod tokens;
pub mod types;

pub use fields::FieldGenerator;
pub use tokens::SdlToken;
pub use types::{RootState, TypeHeaderGenerator};
