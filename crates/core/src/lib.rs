pub mod error;
pub mod interaction;
pub mod model;
pub mod sample;

pub use error::Error;
