//! Typed identifier newtypes backed by storage-generated integers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw identifier produced by storage.
            #[must_use]
            pub const fn from_raw(value: i32) -> Self {
                Self(value)
            }

            /// Access the raw integer.
            #[must_use]
            pub const fn as_raw(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i32>()
                    .map(Self)
                    .map_err(|_| ValidationError::InvalidId(s.to_string()))
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`User`](crate::user::User).
    UserId
);
