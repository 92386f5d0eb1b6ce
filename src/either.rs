// (c) Copyright 2025 Helsing GmbH. All rights reserved.

//! The enum Either with variants Left and Right is a general purpose sum type
//! with two cases.
//!
//! Neither side carries a fixed meaning. In particular, Left is not an error
//! channel, which is why only the Left side can be [mapped](Either::map).
use crate::error::{Variant, WrongVariantAccess};
use std::fmt;

/// A value that is exactly one of `Left(L)` or `Right(R)`.
///
/// The side is fixed at construction; no method mutates an `Either` in place. Two values are
/// equal only when they hold the same side with equal payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Wraps `value` as the Left side.
    pub const fn of_left(value: L) -> Self {
        Either::Left(value)
    }

    /// Wraps `value` as the Right side.
    pub const fn of_right(value: R) -> Self {
        Either::Right(value)
    }

    pub const fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub const fn is_right(&self) -> bool {
        !self.is_left()
    }

    /// Reports which side this value holds.
    pub const fn variant(&self) -> Variant {
        match self {
            Either::Left(_) => Variant::Left,
            Either::Right(_) => Variant::Right,
        }
    }

    /// Converts from `&Either<L, R>` to `Either<&L, &R>`.
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Returns the Left payload, discarding a Right one.
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Returns the Right payload, discarding a Left one.
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Calls `consumer` with the Left payload, and does nothing for Right.
    ///
    /// The callback runs synchronously, at most once, and anything it panics with reaches the
    /// caller untouched.
    pub fn if_left(&self, consumer: impl FnOnce(&L)) {
        if let Either::Left(l) = self {
            consumer(l);
        }
    }

    /// Maps the Left payload through `f`, passing a Right payload through as is.
    ///
    /// `f` is only called for Left. A Right value is moved into the new type unchanged; its
    /// payload type never depended on `L` in the first place.
    pub fn map<L2>(self, f: impl FnOnce(L) -> L2) -> Either<L2, R> {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }
}

impl<L, R> Either<L, R>
where
    L: fmt::Debug,
    R: fmt::Debug,
{
    /// Borrows the Left payload, or explains why there is none.
    pub fn try_left(&self) -> Result<&L, WrongVariantAccess> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(WrongVariantAccess::new(Variant::Left, self)),
        }
    }

    /// Borrows the Right payload, or explains why there is none.
    pub fn try_right(&self) -> Result<&R, WrongVariantAccess> {
        match self {
            Either::Left(_) => Err(WrongVariantAccess::new(Variant::Right, self)),
            Either::Right(r) => Ok(r),
        }
    }

    /// Borrows the Left payload.
    ///
    /// # Panics
    /// If `self` is Right. Check with [`Self::is_left`] first, or use [`Self::try_left`],
    /// [`Self::if_left`] or [`Self::map`] instead.
    #[track_caller]
    pub fn get_left(&self) -> &L {
        match self.try_left() {
            Ok(l) => l,
            Err(e) => panic!("{e}"),
        }
    }

    /// Borrows the Right payload.
    ///
    /// # Panics
    /// If `self` is Left.
    #[track_caller]
    pub fn get_right(&self) -> &R {
        match self.try_right() {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }

    /// Like [`Self::get_left`], but takes ownership of the payload.
    ///
    /// # Panics
    /// If `self` is Right.
    #[track_caller]
    pub fn into_left(self) -> L {
        match self {
            Either::Left(l) => l,
            right @ Either::Right(_) => {
                panic!("{}", WrongVariantAccess::new(Variant::Left, &right))
            }
        }
    }

    /// Like [`Self::get_right`], but takes ownership of the payload.
    ///
    /// # Panics
    /// If `self` is Left.
    #[track_caller]
    pub fn into_right(self) -> R {
        match self {
            left @ Either::Left(_) => {
                panic!("{}", WrongVariantAccess::new(Variant::Right, &left))
            }
            Either::Right(r) => r,
        }
    }
}

impl<A, B> Either<Either<A, B>, B> {
    /// Converts from `Either<Either<A, B>, B>` to `Either<A, B>`.
    pub fn flatten(self) -> Either<A, B> {
        match self {
            Either::Left(nested) => nested,
            Either::Right(b) => Either::Right(b),
        }
    }
}

impl<A, B> Either<A, Either<A, B>> {
    /// Converts from `Either<A, Either<A, B>>` to `Either<A, B>`.
    pub fn flatten(self) -> Either<A, B> {
        match self {
            Either::Left(a) => Either::Left(a),
            Either::Right(nested) => nested,
        }
    }
}

impl<L, R> fmt::Display for Either<L, R>
where
    L: fmt::Display,
    R: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "Left({l})"),
            Either::Right(r) => write!(f, "Right({r})"),
        }
    }
}
