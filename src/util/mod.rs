mod errors;
pub use errors::*;


mod either;
pub use either::*;

mod dispatch;
