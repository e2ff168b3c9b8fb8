// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed record identifiers.
//!
//! Each entity gets its own identifier type so an identifier for one
//! collection can never be used to address another.

use serde::{Deserialize, Serialize};

/// Common behaviour of the numeric record identifiers.
pub trait RecordId: Copy + Eq + Ord + std::hash::Hash + std::fmt::Debug + std::fmt::Display {
    /// Wraps a raw numeric value.
    fn from_value(value: u32) -> Self;

    /// Returns the raw numeric value.
    fn value(self) -> u32;
}

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Creates an identifier from its numeric value.
            #[must_use]
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Returns the numeric value.
            #[must_use]
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl RecordId for $name {
            fn from_value(value: u32) -> Self {
                Self(value)
            }

            fn value(self) -> u32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Identifies an [`Account`](crate::Account).
    AccountId
);
record_id!(
    /// Identifies an [`Employee`](crate::Employee).
    EmployeeId
);
record_id!(
    /// Identifies a [`Department`](crate::Department).
    DepartmentId
);
record_id!(
    /// Identifies a [`Request`](crate::Request).
    RequestId
);

/// Computes the identifier for a new record.
///
/// The next identifier is one past the largest existing identifier, or 1
/// for an empty collection. Deleting the newest record would let its
/// identifier be handed out again; records are never deleted.
#[must_use]
pub fn next_id<I, T>(existing: I) -> T
where
    I: IntoIterator<Item = T>,
    T: RecordId,
{
    let max: Option<u32> = existing.into_iter().map(RecordId::value).max();
    T::from_value(max.map_or(1, |value| value.saturating_add(1)))
}
