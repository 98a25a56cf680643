//! Offset/limit pagination for the list endpoint

use serde::Deserialize;

/// Default number of items returned by a list call
const DEFAULT_TAKE: u32 = 20;

/// Pagination window: skip the first `skip` rows, return at most `take`.
///
/// Both values are non-negative by construction; a skip past the end of
/// the table yields an empty result, not an error.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub skip: u32,
    pub take: u32,
}

impl Page {
    pub fn new(skip: u32, take: u32) -> Self {
        Self { skip, take }
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        self.skip as i64
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.take as i64
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            take: DEFAULT_TAKE,
        }
    }
}

/// Query parameters for the list endpoint.
///
/// Deserialized as unsigned so a negative skip or take is rejected
/// during extraction with a client error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub skip: Option<u32>,
    pub take: Option<u32>,
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Self::new(
            params.skip.unwrap_or(0),
            params.take.unwrap_or(DEFAULT_TAKE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let page = Page::from(PageParams::default());
        assert_eq!(page.skip, 0);
        assert_eq!(page.take, 20);
    }

    #[test]
    fn offset_and_limit() {
        let page = Page::new(15, 5);
        assert_eq!(page.offset(), 15);
        assert_eq!(page.limit(), 5);
    }

    #[test]
    fn params_override_defaults() {
        let page = Page::from(PageParams {
            skip: Some(40),
            take: None,
        });
        assert_eq!(page.skip, 40);
        assert_eq!(page.take, 20);
    }

    #[test]
    fn negative_values_fail_deserialization() {
        let err = serde_json::from_str::<PageParams>(r#"{"skip":-1}"#);
        assert!(err.is_err());
    }
}
