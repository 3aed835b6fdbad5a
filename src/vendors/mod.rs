//! Vendor listing slice.
//!
//! The canonical consumer of the pagination contract. The SQL accessor
//! lives behind [`VendorStore`], the generic persistence seam; the service
//! owns the spec-to-args conversion and the metadata computation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::pagination::{PageArgs, PageMetadata, PageSpec};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vendor {
    pub id: i64,
    pub name: String,
    pub contact_email: String,
}

/// Persistence seam for vendor listings. Implementations execute the
/// storage query described by the args and return one page of rows plus
/// the unpaged total count.
pub trait VendorStore: Send + Sync {
    fn fetch(&self, args: &PageArgs) -> Result<(Vec<Vendor>, i64), AppError>;
}

/// Thin listing service. Holds the store as a named field and forwards
/// explicitly rather than inheriting its methods.
#[derive(Clone)]
pub struct VendorService {
    store: Arc<dyn VendorStore>,
}

impl VendorService {
    pub fn new(store: Arc<dyn VendorStore>) -> Self {
        Self { store }
    }

    /// Fetch one page of vendors and the matching page metadata.
    pub fn list(&self, spec: &PageSpec) -> Result<(Vec<Vendor>, PageMetadata), AppError> {
        let args = spec.build_args();
        let (vendors, total_entries) = self.store.fetch(&args)?;

        // Metadata divides by the spec limit; default it first so a
        // zero-limit request cannot hit the division-by-zero contract.
        let metadata = spec.with_defaulted_limit().build_metadata(total_entries);

        Ok((vendors, metadata))
    }
}

/// In-memory store standing in for the relational accessor. Supports
/// ordering by `id` or `name`; unknown columns fall back to `id`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryVendorStore {
    vendors: Vec<Vendor>,
}

impl InMemoryVendorStore {
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self { vendors }
    }
}

impl VendorStore for InMemoryVendorStore {
    fn fetch(&self, args: &PageArgs) -> Result<(Vec<Vendor>, i64), AppError> {
        let mut rows = self.vendors.clone();
        match args.order_by.as_str() {
            "name" => rows.sort_by(|a, b| a.name.cmp(&b.name)),
            _ => rows.sort_by_key(|v| v.id),
        }
        if args.order == "DESC" {
            rows.reverse();
        }

        let total = rows.len() as i64;
        let start = args.offset.clamp(0, total) as usize;
        let end = (start + args.limit.max(0) as usize).min(rows.len());

        Ok((rows[start..end].to_vec(), total))
    }
}
