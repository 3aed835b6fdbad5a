//! Shared pagination contract for list endpoints.
//!
//! Every "get all" operation goes through the same three shapes: a
//! request-facing [`PageSpec`] parsed from the query string, a
//! storage-facing [`PageArgs`] handed to the accessor, and a
//! response-facing [`PageMetadata`] computed from the unpaged row count.

use serde::{Deserialize, Deserializer, Serialize};

/// Page size applied when the caller supplies none (or a non-positive one).
pub const DEFAULT_LIMIT: i64 = 10;

/// Caller-supplied paging request, constructed per-request from query
/// parameters and discarded after the query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSpec {
    #[serde(default, deserialize_with = "lenient_limit")]
    pub limit: i64,
    #[serde(default = "default_page", deserialize_with = "lenient_page")]
    pub page: i64,
    #[serde(default)]
    pub order: String,
    #[serde(default)]
    pub order_by: String,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            limit: 0,
            page: 1,
            order: String::new(),
            order_by: String::new(),
        }
    }
}

fn default_page() -> i64 {
    1
}

// Query values arrive as strings; a value that fails to parse falls back to
// page 1 instead of failing the whole extraction.
fn lenient_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()).unwrap_or(1))
}

fn lenient_limit<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()).unwrap_or(0))
}

/// Storage-layer paging parameters derived from a [`PageSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageArgs {
    pub limit: i64,
    pub offset: i64,
    /// Normalized to `"ASC"` or `"DESC"`.
    pub order: String,
    pub order_by: String,
}

/// Page-count metadata returned alongside a list of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub total_pages: i64,
    pub current_page: i64,
    pub total_entries: i64,
}

impl PageSpec {
    /// Convert the request into storage-level offset/limit parameters.
    ///
    /// The limit is defaulted to [`DEFAULT_LIMIT`] when non-positive, but
    /// the offset is computed from the *raw* caller-supplied limit: a
    /// limit of 0 collapses every page to offset 0, and a negative limit
    /// with `page > 1` yields a negative offset. Kept as-is for wire
    /// compatibility with existing clients.
    pub fn build_args(&self) -> PageArgs {
        let limit = if self.limit <= 0 {
            DEFAULT_LIMIT
        } else {
            self.limit
        };
        let offset = self.limit * (self.page - 1);
        let order = match self.order.to_ascii_uppercase().as_str() {
            "DESC" => "DESC",
            _ => "ASC",
        };

        PageArgs {
            limit,
            offset,
            order: order.to_string(),
            order_by: self.order_by.clone(),
        }
    }

    /// Convert the unpaged row count into page-count metadata.
    ///
    /// Contract: `self.limit > 0`. The division below uses the raw spec
    /// limit, so a zero limit is a caller bug and panics; callers must
    /// default the limit before computing metadata (see
    /// [`Self::with_defaulted_limit`]).
    pub fn build_metadata(&self, total_entries: i64) -> PageMetadata {
        let mut total_pages = total_entries / self.limit;
        if total_entries % self.limit != 0 {
            total_pages += 1;
        }

        PageMetadata {
            total_pages,
            current_page: self.page,
            total_entries,
        }
    }

    /// Copy of the spec with a non-positive limit replaced by
    /// [`DEFAULT_LIMIT`], satisfying the [`Self::build_metadata`] contract.
    pub fn with_defaulted_limit(&self) -> Self {
        let mut spec = self.clone();
        if spec.limit <= 0 {
            spec.limit = DEFAULT_LIMIT;
        }
        spec
    }
}
