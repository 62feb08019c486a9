use crate::action::IndicesOptions;
use serde::{Deserialize, Serialize};

///
/// OriginalIndices
///
/// The index expression exactly as the caller supplied it, with the options
/// it is to be resolved under. Carried through resolution unexamined for
/// downstream use such as error reporting and re-validation.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct OriginalIndices {
    indices: Vec<String>,
    options: IndicesOptions,
}

impl OriginalIndices {
    #[must_use]
    pub const fn new(indices: Vec<String>, options: IndicesOptions) -> Self {
        Self { indices, options }
    }

    /// Returns the raw expression elements as supplied by the caller.
    #[must_use]
    pub fn indices(&self) -> &[String] {
        &self.indices
    }

    /// Returns the resolution options the expression was supplied with.
    #[must_use]
    pub const fn options(&self) -> IndicesOptions {
        self.options
    }
}
