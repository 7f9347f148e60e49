//! Users table rendering, split the same way as the data it shows:
//! - `columns`: column widths
//! - `header`: header row from the column schema
//! - `row`: one body row per visible user

pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, ScrollArea, Ui};
use egui_extras::TableBuilder;
use userboard_business::UsersTable;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

/// Renders the current page of `table`.
///
/// Every visible row is laid out; a page holds at most 50 rows.
pub fn users_table(ui: &mut Ui, table: &UsersTable) {
    let columns = table.columns();
    let rows = table.visible_rows();

    ScrollArea::horizontal()
        .id_salt("users_table_scroll")
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .cell_layout(Layout::left_to_right(Align::Center));
            for column in table_columns() {
                builder = builder.column(column);
            }

            builder
                .header(HEADER_HEIGHT, |mut header| {
                    render_table_header(&mut header, columns);
                })
                .body(|mut body| {
                    for user in rows {
                        body.row(ROW_HEIGHT, |mut row| {
                            render_user_row(&mut row, columns, user);
                        });
                    }
                });
        });
}
