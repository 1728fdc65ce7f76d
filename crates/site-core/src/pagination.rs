//! Server pagination as reported by the listing endpoints.

use serde::{Deserialize, Serialize};

use crate::entities::Task;

/// Pagination block returned alongside a page of tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next_page: bool,
}

/// One page of a column listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    pub pagination: Pagination,
}

/// Per-column pagination cursor kept by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCursor {
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub has_next_page: bool,
}

impl PageCursor {
    /// Cursor positioned on the first page, before any server response.
    #[must_use]
    pub const fn first(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            total_pages: 0,
            has_next_page: false,
        }
    }

    /// Adopt the server's view of the page just loaded.
    pub const fn apply(&mut self, pagination: &Pagination) {
        self.page = pagination.page;
        self.total_pages = pagination.total_pages;
        self.has_next_page = pagination.has_next_page;
    }
}
