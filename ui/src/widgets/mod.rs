mod error_view;
mod pagination_controls;
mod users_page;
pub mod users_table;

pub use error_view::error_view;
pub use pagination_controls::{page_indicator, page_size_label, pagination_controls, rows_label};
pub use users_page::{PAGE_HEADING, users_page};
pub use users_table::users_table;
