pub mod combinators;
pub mod util;

pub use util::{Either, Error, Result, Side};
