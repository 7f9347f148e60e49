//! View state machine for the users table.
//!
//! ```text
//! Loading --fetch ok--> Ready(table)
//! Loading --fetch err--> Error(message)
//! ```
//!
//! `Ready` and `Error` are terminal. Pagination only does something in `Ready`.

use log::{debug, warn};

use crate::{ColumnDef, FetchError, FetchResult, PageSize, Pagination, USER_COLUMNS, User};

/// The fetched users together with their pagination state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersTable {
    users: Vec<User>,
    pagination: Pagination,
}

impl UsersTable {
    pub fn new(users: Vec<User>) -> Self {
        let pagination = Pagination::new(users.len());
        Self { users, pagination }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn columns(&self) -> &'static [ColumnDef] {
        &USER_COLUMNS
    }

    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Rows on the current page.
    pub fn visible_rows(&self) -> &[User] {
        self.pagination.visible(&self.users)
    }

    pub fn set_page_index(&mut self, page_index: usize) {
        self.pagination.set_page_index(page_index);
    }

    pub fn first_page(&mut self) {
        self.pagination.first_page();
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous_page();
    }

    pub fn next_page(&mut self) {
        self.pagination.next_page();
    }

    pub fn last_page(&mut self) {
        self.pagination.last_page();
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.pagination.set_page_size(page_size);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UsersView {
    #[default]
    Loading,
    Error(FetchError),
    Ready(UsersTable),
}

impl UsersView {
    /// Applies the outcome of the users fetch.
    ///
    /// Only the first outcome counts; anything arriving after `Loading` is dropped.
    pub fn apply(&mut self, result: FetchResult) {
        if !self.is_loading() {
            warn!("Ignoring users fetch result, view already settled");
            return;
        }

        *self = match result {
            Ok(users) => {
                debug!("Users view ready with {} rows", users.len());
                Self::Ready(UsersTable::new(users))
            }
            Err(err) => Self::Error(err),
        };
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(err) => Some(err.message()),
            _ => None,
        }
    }

    pub const fn table(&self) -> Option<&UsersTable> {
        match self {
            Self::Ready(table) => Some(table),
            _ => None,
        }
    }

    pub fn table_mut(&mut self) -> Option<&mut UsersTable> {
        match self {
            Self::Ready(table) => Some(table),
            _ => None,
        }
    }
}
