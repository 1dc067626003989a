//! Paginated list wrapper returned by list endpoints.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Cursor metadata accompanying a page of records.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMetadata {
    /// Pass as `before` to fetch the previous page.
    pub before: Option<String>,
    /// Pass as `after` to fetch the next page.
    pub after: Option<String>,
}

/// One page of records from a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOsList<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub list_metadata: ListMetadata,
}

impl<T> WorkOsList<T> {
    /// True when another page follows this one.
    pub fn has_more(&self) -> bool {
        self.list_metadata.after.is_some()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> IntoIterator for WorkOsList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
