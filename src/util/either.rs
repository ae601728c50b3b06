use crate::util::{Error, Result};
use std::fmt;

/// Which of the two positions an `Either` currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "Left"),
            Side::Right => write!(f, "Right"),
        }
    }
}

/// Holds exactly one value, either an `L` or an `R`.
///
/// Neither position carries a meaning of its own, `Right` is not "the error".
/// Only the active payload is stored, so switching sides drops the old value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    #[inline]
    pub fn left(l: L) -> Either<L, R> {
        Either::Left(l)
    }

    #[inline]
    pub fn right(r: R) -> Either<L, R> {
        Either::Right(r)
    }

    #[inline]
    pub fn is_left(&self) -> bool {
        match self {
            Either::Left(_) => true,
            _ => false,
        }
    }

    #[inline]
    pub fn is_right(&self) -> bool {
        !self.is_left()
    }

    #[inline]
    pub fn side(&self) -> Side {
        match self {
            Either::Left(_) => Side::Left,
            Either::Right(_) => Side::Right,
        }
    }

    pub fn get_left(&self) -> Result<&L> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(Error::wrong_variant(Side::Left, Side::Right)),
        }
    }

    pub fn get_right(&self) -> Result<&R> {
        match self {
            Either::Right(r) => Ok(r),
            Either::Left(_) => Err(Error::wrong_variant(Side::Right, Side::Left)),
        }
    }

    pub fn get_left_mut(&mut self) -> Result<&mut L> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(Error::wrong_variant(Side::Left, Side::Right)),
        }
    }

    pub fn get_right_mut(&mut self) -> Result<&mut R> {
        match self {
            Either::Right(r) => Ok(r),
            Either::Left(_) => Err(Error::wrong_variant(Side::Right, Side::Left)),
        }
    }

    /// Takes the left payload out. A right payload is dropped along with the error.
    pub fn into_left(self) -> Result<L> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(Error::wrong_variant(Side::Left, Side::Right)),
        }
    }

    /// Takes the right payload out. A left payload is dropped along with the error.
    pub fn into_right(self) -> Result<R> {
        match self {
            Either::Right(r) => Ok(r),
            Either::Left(_) => Err(Error::wrong_variant(Side::Right, Side::Left)),
        }
    }

    /// Stores `l` and makes this a `Left`.
    ///
    /// Never fails: a held right value is silently dropped.
    #[inline]
    pub fn set_left(&mut self, l: L) {
        *self = Either::Left(l);
    }

    /// Stores `r` and makes this a `Right`.
    ///
    /// Never fails: a held left value is silently dropped.
    #[inline]
    pub fn set_right(&mut self, r: R) {
        *self = Either::Right(r);
    }
}
