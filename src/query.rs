// src/query.rs
//! Turns a caller's page request into the concrete parameters sent to the endpoint.

use crate::constants::{FIRST_PAGE, PAGE_DISPLAY_SIZE, PAGE_FETCH_LIMIT};
use crate::types::ValidationError;
use serde::Serialize;

/// What the caller asks for: which page, filtered to which colors.
///
/// Both parts are optional. A page, once set, is at least 1; colors keep the
/// caller's order with duplicates dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    page: Option<u32>,
    colors: Vec<String>,
}

impl PageRequest {
    /// An empty request: first page, no color filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a specific page. Pages start at 1.
    pub fn with_page(self, page: i64) -> Result<Self, ValidationError> {
        let page = u32::try_from(page)
            .ok()
            .filter(|p| *p >= FIRST_PAGE)
            .ok_or(ValidationError::NonPositivePage(page))?;
        Ok(Self {
            page: Some(page),
            ..self
        })
    }

    /// Adds a color to the filter.
    pub fn with_color(self, color: impl Into<String>) -> Result<Self, ValidationError> {
        let color = color.into();
        if color.trim().is_empty() {
            return Err(ValidationError::EmptyField("color"));
        }

        let mut colors = self.colors;
        if !colors.contains(&color) {
            colors.push(color);
        }
        Ok(Self { colors, ..self })
    }

    /// Adds each color to the filter.
    pub fn with_colors<I, S>(self, colors: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        colors
            .into_iter()
            .try_fold(self, |request, color| request.with_color(color))
    }

    pub fn page(&self) -> Option<u32> {
        self.page
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

/// Parameters handed to the URL builder.
///
/// Invariant: `offset == (page - 1) * (limit - 1)`. The step is the display
/// size, not the limit, because each fetch carries one lookahead record.
/// `offset` is wider than `page` so the product never overflows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParams {
    pub color_filter: Vec<String>,
    pub page: u32,
    pub limit: u32,
    pub offset: u64,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            color_filter: Vec::new(),
            page: FIRST_PAGE,
            limit: PAGE_FETCH_LIMIT,
            offset: 0,
        }
    }
}

/// Derives the query for a request. Absent request means the defaults.
pub fn build_query(request: Option<&PageRequest>) -> QueryParams {
    let Some(request) = request else {
        return QueryParams::default();
    };

    let (page, offset) = match request.page {
        Some(page) => (page, page_offset(page)),
        None => (FIRST_PAGE, 0),
    };

    QueryParams {
        color_filter: request.colors.clone(),
        page,
        limit: PAGE_FETCH_LIMIT,
        offset,
    }
}

/// Offset of the first record on `page`. Pages below the first start at 0.
fn page_offset(page: u32) -> u64 {
    u64::from(page.saturating_sub(FIRST_PAGE)) * u64::from(PAGE_DISPLAY_SIZE)
}
