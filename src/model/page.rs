use crate::error::AppError;

pub const DEFAULT_LIMIT: u64 = 10;

/// Pagination window parsed from the `limit` and `p` query parameters.
///
/// `p` is 1-indexed. Both values must be positive integers when supplied;
/// anything else (including an empty string) is a Bad Request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u64,
    pub page: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: 1,
        }
    }
}

impl Pagination {
    pub fn from_raw(limit: Option<&str>, page: Option<&str>) -> Result<Self, AppError> {
        let mut pagination = Self::default();

        if let Some(raw) = limit {
            pagination.limit = parse_positive(raw)?;
        }
        if let Some(raw) = page {
            pagination.page = parse_positive(raw)?;
        }

        Ok(pagination)
    }

    /// Row offset of the window. Saturates on overflow: a window that
    /// cannot be represented starts past any possible result set, and
    /// `out_of_range` reports it as such.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .checked_mul(self.limit)
            .unwrap_or(u64::MAX)
    }

    /// Whether the requested page lies past the end of a result set of
    /// `total` rows. Page 1 of an empty set is valid (it yields an empty
    /// list); any later page with no rows under it is Not Found.
    pub fn out_of_range(&self, total: u64) -> bool {
        self.page > 1 && self.offset() >= total
    }
}

fn parse_positive(raw: &str) -> Result<u64, AppError> {
    match raw.parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(AppError::BadRequest),
    }
}
