use crate::util::Side;
use std::result::Result as stdResult;
use thiserror::Error;

pub type Result<T> = stdResult<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Reading the inactive side of an `Either` is a caller bug, never a data condition.
    #[error("either doesn't hold {expected}")]
    WrongVariant { expected: Side, found: Side },
}

impl Error {
    pub(crate) fn wrong_variant(expected: Side, found: Side) -> Error {
        log::debug!("either doesn't hold {}, holds {}", expected, found);
        Error::WrongVariant { expected, found }
    }
}
