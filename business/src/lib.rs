//! Non-rendering logic for the users table: the user model, the one-shot
//! fetch, client-side pagination and the view state machine.

mod columns;
mod config;
mod fetch;
mod pagination;
mod user;
mod users_view;

pub use columns::{ColumnDef, USER_COLUMNS};
pub use config::{BusinessConfig, ConfigError, DEFAULT_API_BASE_URL};
pub use fetch::{
    EhttpFetcher, FetchError, FetchResult, FetchService, OnFetchDone, decode_users, fetch_users,
};
pub use pagination::{PageSize, PageSizeError, Pagination};
pub use user::{Address, Geo, User, UserId};
pub use users_view::{UsersTable, UsersView};
