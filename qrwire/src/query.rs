//! Listing query shaping, pagination math and date-bound serialization.
//!
//! Date bounds travel as ISO-8601 UTC strings. A start bound covers its whole
//! day from midnight; an end bound runs to the last millisecond of its day so
//! the end date is inclusive. Absent bounds are omitted from the query string.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::validate::ValidationError;

/// Fixed dashboard page size.
pub const PAGE_SIZE: u32 = 5;

/// `ceil(total / page_size)`; zero items means zero pages.
#[must_use]
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Clamp a page number into `[1, total_pages]` (page 1 when there are no pages).
#[must_use]
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// Query parameters for `GET /qrcodes`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ListQuery {
    /// Unfiltered query for `page` at the fixed page size.
    #[must_use]
    pub fn new(page: u32) -> Self {
        Self { page: page.max(1), limit: PAGE_SIZE, start_date: None, end_date: None }
    }

    #[must_use]
    pub fn with_range(mut self, start_date: Option<Date>, end_date: Option<Date>) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Key/value pairs in wire order. Bounds only appear when set.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        if let Some(start) = self.start_date {
            pairs.push(("startDate", start_of_day(start)));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", end_of_day(end)));
        }
        pairs
    }

    /// Percent-encoded query string without the leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .into_iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(&v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Parse a `YYYY-MM-DD` value as produced by `<input type="date">`.
///
/// Blank input means "no bound".
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] for non-blank input that is not a
/// calendar date.
pub fn parse_date_input(raw: &str) -> Result<Option<Date>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate(raw.to_owned()))
}

/// `YYYY-MM-DD` form of a date, the inverse of [`parse_date_input`].
#[must_use]
pub fn date_input_value(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Midnight UTC of `date` as an ISO-8601 string.
#[must_use]
pub fn start_of_day(date: Date) -> String {
    format!("{}T00:00:00.000Z", date_input_value(date))
}

/// Last millisecond of `date` in UTC as an ISO-8601 string.
#[must_use]
pub fn end_of_day(date: Date) -> String {
    format!("{}T23:59:59.999Z", date_input_value(date))
}

/// Human-readable form of a backend timestamp, e.g. `March 5, 2024`.
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn display_date(raw: &str) -> String {
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .and_then(|ts| {
            ts.format(format_description!("[month repr:long] [day padding:none], [year]"))
                .ok()
        })
        .unwrap_or_else(|| raw.to_owned())
}
