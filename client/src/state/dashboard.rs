//! Dashboard listing state: page position, date bounds and fetch sequencing.
//!
//! DESIGN
//! ======
//! Every fetch takes a sequence number from [`DashboardState::begin_fetch`].
//! Results are applied only when they carry the latest issued number, so the
//! last request issued wins no matter which response arrives first.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use qrwire::query::clamp_page;
use qrwire::{ListQuery, PAGE_SIZE, Paginated, QrCode, total_pages};
use time::Date;

use super::toast::Toast;

/// What the listing fetch depends on: the query, and only while signed in.
///
/// Auth loading flips leave the key unchanged, so they never refetch.
#[must_use]
pub fn listing_key(signed_in: bool, query: ListQuery) -> Option<ListQuery> {
    signed_in.then_some(query)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardState {
    pub items: Vec<QrCode>,
    pub total: u64,
    pub page: u32,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub loading: bool,
    latest_seq: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            start_date: None,
            end_date: None,
            loading: true,
            latest_seq: 0,
        }
    }
}

impl DashboardState {
    /// Query for the current position and bounds.
    #[must_use]
    pub fn query(&self) -> ListQuery {
        ListQuery::new(self.page).with_range(self.start_date, self.end_date)
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, PAGE_SIZE)
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Pagination controls only render with more than one page.
    #[must_use]
    pub fn show_pagination(&self) -> bool {
        self.total_pages() > 1
    }

    /// Move to `page`, clamped into range. Returns whether the page changed.
    pub fn go_to(&mut self, page: u32) -> bool {
        let target = clamp_page(page, self.total_pages());
        let changed = target != self.page;
        self.page = target;
        changed
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to(self.page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to(self.page.saturating_sub(1))
    }

    pub fn set_start_date(&mut self, date: Option<Date>) {
        if self.start_date != date {
            self.start_date = date;
            self.page = 1;
        }
    }

    pub fn set_end_date(&mut self, date: Option<Date>) {
        if self.end_date != date {
            self.end_date = date;
            self.page = 1;
        }
    }

    pub fn clear_filters(&mut self) {
        self.start_date = None;
        self.end_date = None;
        self.page = 1;
    }

    /// Issue a new sequence number for the current query.
    pub fn begin_fetch(&mut self) -> (u64, ListQuery) {
        self.latest_seq += 1;
        self.loading = true;
        (self.latest_seq, self.query())
    }

    /// Apply a page of results. Returns `false` for a superseded response.
    pub fn apply_page(&mut self, seq: u64, page: Paginated<QrCode>) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.items = page.data;
        self.total = page.total;
        self.loading = false;
        true
    }

    /// Record a failed fetch, keeping the previous list.
    ///
    /// Returns the toast to show, or `None` for a superseded response.
    pub fn apply_error(&mut self, seq: u64) -> Option<Toast> {
        if seq != self.latest_seq {
            return None;
        }
        self.loading = false;
        Some(Toast::error("Failed to Load", "Could not load your QR codes. Please try again."))
    }
}
