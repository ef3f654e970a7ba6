//! Typed IDs for type-safe entity references.
//!
//! The expense API identifies every record by an integer primary key. Wrapping
//! them prevents passing a `VehicleId` where a `ClientId` is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from the raw primary key.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw primary key.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

typed_id!(CategoryId, "Unique identifier for an expense category.");
typed_id!(ClientId, "Unique identifier for a client.");
typed_id!(ProjectId, "Unique identifier for a client project.");
typed_id!(VehicleId, "Unique identifier for a vehicle.");
typed_id!(ExpenseId, "Unique identifier for an expense.");
typed_id!(TripId, "Unique identifier for a mileage trip.");
