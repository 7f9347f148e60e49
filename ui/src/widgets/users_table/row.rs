//! Row rendering for the users table.

use egui_extras::TableRow;
use userboard_business::{ColumnDef, User};

/// Renders a single user row, one cell per column, reading the nested field
/// behind each column's accessor.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, columns: &[ColumnDef], user: &User) {
    for column in columns {
        row.col(|ui| {
            ui.label(column.cell(user));
        });
    }
}
