mod array_includes;
mod no_white_space;

pub use array_includes::{ArrayIncludes, array_includes};
pub use no_white_space::{NoWhiteSpace, no_white_space};
