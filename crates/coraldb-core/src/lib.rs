//! Cluster-metadata value model for CoralDB: index identities, original
//! request targets, and the resolved target set handed to query routing.
#![warn(unreachable_pub)]

pub mod action;
pub mod index;
pub mod metadata;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        action::{IndicesOptions, OriginalIndices},
        index::Index,
        metadata::{Local, MATCH_ALL, ResolvedIndices},
    };
}
