//! Product Listing Data

/// A one-based page of products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Returns `None` when either value is zero, which means "no pagination".
    #[must_use]
    pub fn new(page: u32, limit: u32) -> Option<Self> {
        (page > 0 && limit > 0).then_some(Self { page, limit })
    }

    /// Build a page from optional query values; absent values count as zero.
    #[must_use]
    pub fn from_query(page: Option<u32>, limit: Option<u32>) -> Option<Self> {
        Self::new(page.unwrap_or_default(), limit.unwrap_or_default())
    }

    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn limit(self) -> u32 {
        self.limit
    }

    /// Number of rows preceding this page.
    #[must_use]
    pub fn offset(self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

/// Listing direction over insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Parse the `sort` query value; anything but exactly `desc` sorts ascending.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("desc") => Self::Descending,
            _ => Self::Ascending,
        }
    }
}
