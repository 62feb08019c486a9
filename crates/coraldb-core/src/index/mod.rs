//! Index identity values.
//!
//! Invariants:
//! - An identity is name plus creation uuid; equality covers both.
//! - Identity only; carries no implication that the index exists.


use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Uuid value for indices that have not been assigned a concrete uuid yet.
pub const UNKNOWN_UUID: &str = "_na_";

///
/// Index
///
/// Immutable identity of a single index. Resolution code that only cares
/// about targeting reads the name; the uuid disambiguates recreated indices
/// for callers that need it.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[display("[{name}/{uuid}]")]
pub struct Index {
    name: String,
    uuid: String,
}

impl Index {
    #[must_use]
    pub fn new(name: impl Into<String>, uuid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uuid: uuid.into(),
        }
    }

    /// Identity for an index that has no concrete uuid assigned.
    #[must_use]
    pub fn unknown_uuid(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uuid: UNKNOWN_UUID.to_string(),
        }
    }

    /// Returns the index name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the uuid assigned when the index was created, or
    /// [`UNKNOWN_UUID`].
    #[must_use]
    pub fn uuid(&self) -> &str {
        &self.uuid
    }
}
