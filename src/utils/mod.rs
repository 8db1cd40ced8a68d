//! Collection, array and object utility functions.

pub mod arrays;
pub mod collections;

pub use arrays::*;
pub use collections::*;
