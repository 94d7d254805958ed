pub mod types;
pub mod mac;

pub use types::*;
pub use mac::*;
