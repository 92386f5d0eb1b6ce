// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # tagged-either: a two-variant sum type
//!
//! This crate provides [`Either`], a value that is exactly one of two alternatives, `Left(L)`
//! or `Right(R)`. Neither side carries a built-in meaning: unlike [`Result`], Left is not an
//! error channel and Right is not a success channel.
//!
//! An `Either` never changes sides after construction. It offers:
//!
//! - construction with [`Either::of_left`] and [`Either::of_right`] (or the variants directly),
//! - inspection with [`Either::is_left`], [`Either::is_right`] and [`Either::variant`],
//! - unchecked extraction with [`Either::get_left`] and [`Either::get_right`],
//! - a conditional callback, [`Either::if_left`],
//! - a transform over the Left side, [`Either::map`].
//!
//! Only the Left side can be mapped. There is deliberately no Right-side map and no bi-map.
//!
//! ## Reading the wrong side
//!
//! Asking a Right value for its Left payload (or vice versa) is a bug in the calling code,
//! so the unchecked accessors panic with a [`WrongVariantAccess`] message naming both sides and
//! the offending value. Guard with [`Either::is_left`], or use [`Either::try_left`],
//! [`Either::if_left`] or [`Either::map`] where panicking is not acceptable.
//!
//! ```rust
//! use tagged_either::{Either, Variant};
//!
//! let count: Either<u32, String> = Either::of_left(5);
//! assert!(count.is_left());
//! assert_eq!(count.get_left(), &5);
//! assert_eq!(count.map(|n| n + 1), Either::of_left(6));
//!
//! let name: Either<u32, String> = Either::of_right("r".to_string());
//! let mut seen = Vec::new();
//! name.if_left(|n| seen.push(*n));
//! assert!(seen.is_empty());
//!
//! let err = name.try_left().unwrap_err();
//! assert_eq!(err.found(), Variant::Right);
//! assert_eq!(err.to_string(), r#"called `get_left` on a right value: Right("r")"#);
//! ```
//!
//! ## Threads
//!
//! `Either` has no interior mutability, so it is `Send` and `Sync` exactly when both
//! payloads are. Callbacks passed to [`Either::if_left`] and [`Either::map`] run on the calling
//! thread before the method returns.
//!
//! ## Features
//!
//! - `arbitrary`: Implements `quickcheck::Arbitrary` for `Either`, useful for property-based
//!   testing. Shrinking never changes the side.
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

#[cfg(any(test, feature = "arbitrary"))]
mod arbitrary;
pub mod either;
pub mod error;

pub use either::Either;
pub use error::{Variant, WrongVariantAccess};
