//! Resolved index targets for a single action.
//!
//! Resolved names no longer contain wildcards or date-math expressions. In
//! contrast to concrete indices, a resolved name might not exist yet, or
//! might refer to an alias or a data stream.
//!
//! Invariants:
//! - Values are immutable after construction; every update returns a new
//!   value and leaves the receiver untouched.
//! - The remote mapping, once published, is never modified.
//! - A match-all local portion is never empty and contains every name.

use crate::{action::OriginalIndices, index::Index, metadata::MATCH_ALL};
use std::{
    collections::{BTreeMap, BTreeSet},
    sync::{Arc, LazyLock},
};

static ALL: LazyLock<ResolvedIndices> = LazyLock::new(|| ResolvedIndices {
    local: Local {
        names: Arc::new(BTreeSet::from([MATCH_ALL.to_string()])),
        original_indices: None,
        is_all: true,
    },
    remote: Arc::new(BTreeMap::new()),
});

///
/// ResolvedIndices
///
/// The full target set of one action: the local indices it addresses, and
/// the remote clusters that must also be asked, each with the raw expression
/// to forward. Backing storage is shared between values, so clones and the
/// match-all singleton are cheap to pass across request-processing stages.
///

#[derive(Clone, Debug)]
pub struct ResolvedIndices {
    local: Local,
    remote: Arc<BTreeMap<String, OriginalIndices>>,
}

impl ResolvedIndices {
    /// Build a local-only target set from resolved names.
    ///
    /// Duplicates collapse; iteration order over the stored names is
    /// lexicographic, not insertion order.
    #[must_use]
    pub fn of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_name_set(names.into_iter().map(Into::into).collect())
    }

    /// Build a local-only target set from index identities.
    ///
    /// Only the name of each identity is read; the uuid is ignored.
    #[must_use]
    pub fn of_indices<'a, I>(indices: I) -> Self
    where
        I: IntoIterator<Item = &'a Index>,
    {
        Self::from_name_set(
            indices
                .into_iter()
                .map(|index| index.name().to_string())
                .collect(),
        )
    }

    /// Build a local-only target set, skipping absent entries.
    #[must_use]
    pub fn of_non_null<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self::from_name_set(names.into_iter().flatten().map(Into::into).collect())
    }

    /// The shared value targeting every index in the cluster.
    #[must_use]
    pub fn all() -> Self {
        ALL.clone()
    }

    fn from_name_set(names: BTreeSet<String>) -> Self {
        Self {
            local: Local {
                names: Arc::new(names),
                original_indices: None,
                is_all: false,
            },
            remote: Arc::new(BTreeMap::new()),
        }
    }

    /// Returns the local portion of the target set.
    #[must_use]
    pub const fn local(&self) -> &Local {
        &self.local
    }

    /// Returns the remote targets keyed by cluster alias.
    #[must_use]
    pub fn remote(&self) -> &BTreeMap<String, OriginalIndices> {
        &self.remote
    }

    /// Layer in remote cluster targets, returning a new value.
    ///
    /// An alias already present in the receiver keeps its existing entry;
    /// the first resolution recorded for a cluster alias is authoritative.
    /// An empty `remote` shares the receiver's storage outright, so no map
    /// is allocated.
    #[must_use]
    pub fn with_remote_indices(&self, remote: BTreeMap<String, OriginalIndices>) -> Self {
        if remote.is_empty() {
            return self.clone();
        }

        let mut merged = remote;
        merged.extend(
            self.remote
                .iter()
                .map(|(alias, original)| (alias.clone(), original.clone())),
        );

        Self {
            local: self.local.clone(),
            remote: Arc::new(merged),
        }
    }

    /// Replace the stored local original-request reference, returning a new
    /// value. Last write wins; the local names are unaffected.
    #[must_use]
    pub fn with_local_original_indices(&self, original_indices: OriginalIndices) -> Self {
        Self {
            local: Local {
                names: Arc::clone(&self.local.names),
                original_indices: Some(original_indices),
                is_all: self.local.is_all,
            },
            remote: Arc::clone(&self.remote),
        }
    }

    /// Returns `true` if the action targets no local and no remote indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.local.is_empty() && self.remote.is_empty()
    }
}

///
/// Local
///
/// The local (non-remote) indices addressed by the action.
///

#[derive(Clone, Debug)]
pub struct Local {
    names: Arc<BTreeSet<String>>,
    original_indices: Option<OriginalIndices>,
    is_all: bool,
}

impl Local {
    /// Returns the resolved local names. Holds only the match-all sentinel
    /// for the match-all value.
    #[must_use]
    pub fn names(&self) -> &BTreeSet<String> {
        &self.names
    }

    /// Returns the resolved local names as an owned sequence for call sites
    /// needing positional access. Lexicographic order.
    #[must_use]
    pub fn names_as_vec(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }

    /// Returns the raw expression and options the caller supplied for the
    /// local portion of the request, if recorded.
    #[must_use]
    pub fn original_indices(&self) -> Option<&OriginalIndices> {
        self.original_indices.as_ref()
    }

    /// Returns `true` if no local indices are targeted. The match-all value
    /// is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.is_all && self.names.is_empty()
    }

    /// Returns `true` if `name` is targeted. The match-all value contains
    /// every name, including names that do not exist yet.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.is_all || self.names.contains(name)
    }
}
