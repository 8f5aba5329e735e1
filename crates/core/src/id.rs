//! Strongly-typed identifiers used across the domain.
//!
//! Records are keyed by store-assigned integers. Each collection gets its own
//! newtype so a hive id can never be passed where a section id is expected.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Common surface of record identifiers, used by generic entity sets.
pub trait RecordId:
    Copy
    + Eq
    + Ord
    + core::hash::Hash
    + core::fmt::Debug
    + core::fmt::Display
    + Send
    + Sync
    + 'static
{
    fn from_raw(raw: i32) -> Self;

    fn raw(self) -> i32;
}

/// Identifier of a product category.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i32);

/// Identifier of a catalogue product.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i32);

/// Identifier of a store hive.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HiveId(i32);

/// Identifier of a section inside a store hive.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HiveSectionId(i32);

/// Identifier of a user (actor identity for audit stamps).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(raw: i32) -> Self {
                Self(raw)
            }

            pub const fn get(&self) -> i32 {
                self.0
            }
        }

        impl RecordId for $t {
            fn from_raw(raw: i32) -> Self {
                Self(raw)
            }

            fn raw(self) -> i32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i32> for $t {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }
        }
    };
}

impl_int_newtype!(CategoryId, "CategoryId");
impl_int_newtype!(ProductId, "ProductId");
impl_int_newtype!(HiveId, "HiveId");
impl_int_newtype!(HiveSectionId, "HiveSectionId");
impl_int_newtype!(UserId, "UserId");
