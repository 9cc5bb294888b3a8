#![warn(missing_docs)]

pub mod panic;
pub mod result;
