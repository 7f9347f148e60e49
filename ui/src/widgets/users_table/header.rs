//! Table header rendering for the users table.

use egui::Ui;
use egui_extras::TableRow;
use userboard_business::ColumnDef;

/// Renders one bold header cell per column.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, columns: &[ColumnDef]) {
    for column in columns {
        header.col(|ui| {
            render_header_cell(ui, column.header);
        });
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.strong(label);
}
