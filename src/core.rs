pub mod error;
pub mod id;

mod base;

pub use base::*;
pub use error::Error;
