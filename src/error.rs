// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! Diagnostics for reading the wrong side of an [`Either`](crate::Either).
use std::fmt;

/// Names one of the two sides of an [`Either`](crate::Either), without holding any data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Left,
    Right,
}

impl Variant {
    /// Returns the other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Variant::Left => Variant::Right,
            Variant::Right => Variant::Left,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Left => f.write_str("left"),
            Variant::Right => f.write_str("right"),
        }
    }
}

/// Returned (or panicked with) when the payload of one side is requested from a value holding
/// the other side.
///
/// This is a logic error in the calling code. The unchecked accessors such as
/// [`Either::get_left`](crate::Either::get_left) panic with this error's message, while
/// [`Either::try_left`](crate::Either::try_left) and friends hand it back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrongVariantAccess {
    /// The side whose payload was asked for.
    pub requested: Variant,
    /// `Debug` rendering of the value that was accessed.
    pub rendered: String,
}

impl WrongVariantAccess {
    pub(crate) fn new(requested: Variant, value: &impl fmt::Debug) -> Self {
        Self {
            requested,
            rendered: format!("{value:?}"),
        }
    }

    /// The side the accessed value actually holds.
    pub fn found(&self) -> Variant {
        self.requested.opposite()
    }
}

impl fmt::Display for WrongVariantAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "called `get_{}` on a {} value: {}",
            self.requested,
            self.found(),
            self.rendered
        )
    }
}

impl std::error::Error for WrongVariantAccess {}
