pub mod json;
pub mod traits;

pub use json::*;
pub use traits::*;
