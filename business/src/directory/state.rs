//! Directory State: what the directory looks like right now.
//!
//! Only [`DirectoryStore`](super::DirectoryStore) mutates this type; everyone
//! else reads it through a [`DirectoryView`](super::DirectoryView).

use chrono::{DateTime, Utc};

use super::sequence::Ticket;
use crate::model::{PAGE_SIZE, PageResponse, User};

/// `ceil(total / PAGE_SIZE)`.
pub fn total_pages_for(total: u64) -> u32 {
    u32::try_from(total.div_ceil(u64::from(PAGE_SIZE))).unwrap_or(u32::MAX)
}

/// Pagination metadata of the loaded page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    /// 1-based.
    pub current: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl PageMeta {
    pub fn new(current: u32, total: u64) -> Self {
        Self {
            current,
            per_page: PAGE_SIZE,
            total,
            total_pages: total_pages_for(total),
        }
    }

    /// Highest page that can be shown; an empty directory still has page 1.
    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }
}

impl Default for PageMeta {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryState {
    users: Vec<User>,
    loading: bool,
    error: Option<String>,
    page: PageMeta,
    last_fetch: Option<DateTime<Utc>>,
    applied: Ticket,
}

impl Default for DirectoryState {
    /// Empty and loading: the first fetch has not completed yet.
    fn default() -> Self {
        Self {
            users: Vec::new(),
            loading: true,
            error: None,
            page: PageMeta::default(),
            last_fetch: None,
            applied: Ticket::NONE,
        }
    }
}

impl DirectoryState {
    /// Users of the loaded page, in the order the gateway returned them.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn page(&self) -> PageMeta {
        self.page
    }

    pub fn current_page(&self) -> u32 {
        self.page.current
    }

    pub fn total(&self) -> u64 {
        self.page.total
    }

    pub fn total_pages(&self) -> u32 {
        self.page.total_pages
    }

    pub fn last_fetch(&self) -> Option<DateTime<Utc>> {
        self.last_fetch
    }

    /// Looks a user up on the loaded page only.
    pub fn find(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub(crate) fn applied(&self) -> Ticket {
        self.applied
    }

    pub(crate) fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Drops the loading flag without touching the loaded page. Returns
    /// whether anything changed.
    pub(crate) fn stop_loading(&mut self) -> bool {
        std::mem::replace(&mut self.loading, false)
    }

    /// Replaces users and page metadata in one step.
    ///
    /// `settled` is false while a newer request is still in flight, in which
    /// case the loading flag stays up.
    pub(crate) fn apply_page(
        &mut self,
        mut response: PageResponse,
        ticket: Ticket,
        settled: bool,
        now: DateTime<Utc>,
    ) {
        response.data.truncate(PAGE_SIZE as usize);
        self.users = response.data;
        self.page = PageMeta::new(response.page.max(1), response.total);
        self.error = None;
        self.last_fetch = Some(now);
        self.applied = ticket;
        if settled {
            self.loading = false;
        }
    }

    /// Records a failed fetch; the previous users stay in place.
    pub(crate) fn apply_failure(&mut self, message: String, ticket: Ticket, settled: bool) {
        self.error = Some(message);
        self.applied = ticket;
        if settled {
            self.loading = false;
        }
    }
}
