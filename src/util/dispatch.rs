use crate::util::Either;

impl<L, R> Either<L, R> {
    /// Hands the held value to the handler for its side and returns what that handler returns.
    ///
    /// This is the one read that cannot fail.
    pub fn dispatch<T, FL, FR>(self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    pub fn dispatch_ref<T, FL, FR>(&self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(&L) -> T,
        FR: FnOnce(&R) -> T,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    pub fn map_left<U, F>(self, op: F) -> Either<U, R>
    where
        F: FnOnce(L) -> U,
    {
        self.dispatch(|l| Either::Left(op(l)), Either::Right)
    }

    pub fn map_right<U, F>(self, op: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        self.dispatch(Either::Left, |r| Either::Right(op(r)))
    }

    #[inline]
    pub fn flip(self) -> Either<R, L> {
        self.dispatch(Either::Right, Either::Left)
    }
}
