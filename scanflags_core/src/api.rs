mod core;
mod error;
mod flag;

pub use self::core::*;
pub use error::*;
pub use flag::*;
