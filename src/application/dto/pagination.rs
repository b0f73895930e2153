use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const PUBLIC_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// One-based page number and page size as received from a caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageRequest {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageRequest {
    pub const fn new(page: Option<u32>, page_size: Option<u32>) -> Self {
        Self { page, page_size }
    }

    /// Returns `(page, page_size, offset)`. Missing or zero values fall back to
    /// page 1 and `default_size`; sizes are clamped to `MAX_PAGE_SIZE`.
    pub fn resolve(self, default_size: u32) -> (u32, u32, u32) {
        let page = self.page.filter(|p| *p > 0).unwrap_or(1);
        let page_size = self
            .page_size
            .filter(|s| *s > 0)
            .unwrap_or(default_size)
            .min(MAX_PAGE_SIZE);
        let offset = (page - 1).saturating_mul(page_size);
        (page, page_size, offset)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub const fn new(items: Vec<T>, total: u64, page: u32, page_size: u32) -> Self {
        Self {
            items,
            total,
            page,
            page_size,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct OffsetPage<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
    pub has_more: bool,
}

impl<T> OffsetPage<T> {
    pub fn new(items: Vec<T>, total: u64, limit: u32, offset: u32) -> Self {
        let has_more = u64::from(offset) + u64::from(limit) < total;
        Self {
            items,
            total,
            limit,
            offset,
            has_more,
        }
    }
}
