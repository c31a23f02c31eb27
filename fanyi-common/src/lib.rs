//! Signing helpers shared by the vendor clients in `fanyi`.

mod error;
pub use error::Error;

pub mod helper;
pub mod open_api_sign;
pub mod tc3_sign;
pub mod volc_sign;
