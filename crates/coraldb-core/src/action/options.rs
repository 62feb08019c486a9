#![expect(clippy::struct_excessive_bools)]

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// WildcardKeywordError
///

#[derive(Debug, ThisError)]
pub enum WildcardKeywordError {
    #[error("no wildcard state for [{keyword}]")]
    UnknownKeyword { keyword: String },

    #[error("keyword [none] may not be combined with other wildcard keywords")]
    NoneWithOthers,
}

///
/// IndicesOptions
///
/// Controls how an index expression is resolved: tolerance for unavailable
/// or empty targets, and which wildcard states the expression may expand to.
/// The resolved-targets model stores these unexamined; expansion itself
/// happens upstream.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct IndicesOptions {
    ignore_unavailable: bool,
    allow_no_indices: bool,
    expand_open: bool,
    expand_closed: bool,
    expand_hidden: bool,
}

impl IndicesOptions {
    /// Error on unavailable targets; expand wildcards to open indices only.
    #[must_use]
    pub const fn strict_expand_open() -> Self {
        Self {
            ignore_unavailable: false,
            allow_no_indices: true,
            expand_open: true,
            expand_closed: false,
            expand_hidden: false,
        }
    }

    /// Skip unavailable targets; expand wildcards to open indices only.
    #[must_use]
    pub const fn lenient_expand_open() -> Self {
        Self {
            ignore_unavailable: true,
            allow_no_indices: true,
            expand_open: true,
            expand_closed: false,
            expand_hidden: false,
        }
    }

    /// Error on unavailable targets; wildcard expansion disabled.
    #[must_use]
    pub const fn strict_single_index() -> Self {
        Self {
            ignore_unavailable: false,
            allow_no_indices: false,
            expand_open: false,
            expand_closed: false,
            expand_hidden: false,
        }
    }

    /// Replace the wildcard expansion states with the given wire-level
    /// `expand_wildcards` keywords.
    ///
    /// Accepted keywords are `open`, `closed`, `hidden`, `all`, and `none`;
    /// `none` must appear alone. Tolerance flags are kept as-is.
    pub fn with_wildcard_keywords<'a, I>(self, keywords: I) -> Result<Self, WildcardKeywordError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut options = Self {
            expand_open: false,
            expand_closed: false,
            expand_hidden: false,
            ..self
        };
        let mut seen = 0_usize;
        let mut none = false;

        for keyword in keywords {
            seen += 1;
            match keyword {
                "open" => options.expand_open = true,
                "closed" => options.expand_closed = true,
                "hidden" => options.expand_hidden = true,
                "all" => {
                    options.expand_open = true;
                    options.expand_closed = true;
                    options.expand_hidden = true;
                }
                "none" => none = true,
                other => {
                    return Err(WildcardKeywordError::UnknownKeyword {
                        keyword: other.to_string(),
                    });
                }
            }
        }

        if none && seen > 1 {
            return Err(WildcardKeywordError::NoneWithOthers);
        }

        Ok(options)
    }

    /// Returns `true` if unavailable targets are skipped instead of erroring.
    #[must_use]
    pub const fn ignore_unavailable(&self) -> bool {
        self.ignore_unavailable
    }

    /// Returns `true` if an expression resolving to no indices is tolerated.
    #[must_use]
    pub const fn allow_no_indices(&self) -> bool {
        self.allow_no_indices
    }

    /// Returns `true` if wildcards expand to open indices.
    #[must_use]
    pub const fn expand_open(&self) -> bool {
        self.expand_open
    }

    /// Returns `true` if wildcards expand to closed indices.
    #[must_use]
    pub const fn expand_closed(&self) -> bool {
        self.expand_closed
    }

    /// Returns `true` if wildcards expand to hidden indices.
    #[must_use]
    pub const fn expand_hidden(&self) -> bool {
        self.expand_hidden
    }

    /// Returns `true` if wildcards expand to any state at all.
    #[must_use]
    pub const fn expands_wildcards(&self) -> bool {
        self.expand_open || self.expand_closed || self.expand_hidden
    }
}
