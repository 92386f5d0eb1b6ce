// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! Implementation of the quickcheck::Arbitrary trait for [`Either`].

use crate::Either;
use quickcheck::{Arbitrary, Gen};

impl<L, R> Arbitrary for Either<L, R>
where
    L: Arbitrary,
    R: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Either::Left(L::arbitrary(g))
        } else {
            Either::Right(R::arbitrary(g))
        }
    }

    // Shrinking stays on the same side; a counterexample that only fails for
    // Left would otherwise shrink into a passing Right.
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Either::Left(l) => Box::new(l.shrink().map(Either::Left)),
            Either::Right(r) => Box::new(r.shrink().map(Either::Right)),
        }
    }
}
