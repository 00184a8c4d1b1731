//! Page/limit pagination window

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A validated pagination window.
///
/// Absence of a `Page` means "return everything"; a present one always has
/// `page >= 1` and `1 <= limit <= MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub page: u32,
    pub limit: u32,
}

impl Page {
    pub const MAX_LIMIT: u32 = 100;

    /// Build an optional window from raw query values.
    ///
    /// `page` and `limit` must be supplied together or not at all.
    pub fn from_parts(page: Option<u32>, limit: Option<u32>) -> Result<Option<Self>, DomainError> {
        match (page, limit) {
            (None, None) => Ok(None),
            (Some(page), Some(limit)) => Self::new(page, limit).map(Some),
            _ => Err(DomainError::InvalidPagination(
                "page and limit must be provided together".to_string(),
            )),
        }
    }

    pub fn new(page: u32, limit: u32) -> Result<Self, DomainError> {
        if page == 0 {
            return Err(DomainError::InvalidPagination(
                "page must be at least 1".to_string(),
            ));
        }
        if limit == 0 || limit > Self::MAX_LIMIT {
            return Err(DomainError::InvalidPagination(format!(
                "limit must be between 1 and {}",
                Self::MAX_LIMIT
            )));
        }
        Ok(Self { page, limit })
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.limit)
    }

    #[inline]
    pub fn limit_i64(&self) -> i64 {
        i64::from(self.limit)
    }

    /// Slice an already ordered collection.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset() as usize)
            .take(self.limit as usize)
            .collect()
    }
}
