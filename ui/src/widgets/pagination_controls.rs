//! Page indicator, navigation buttons, page-size selector and row-count footer.

use egui::{Button, ComboBox, Ui};
use userboard_business::{PageSize, Pagination, UsersTable};

/// `"<page> of <count>"`, with pages numbered from one.
///
/// An empty table reads `"0 of 0"`.
pub fn page_indicator(pagination: &Pagination) -> String {
    let count = pagination.page_count();
    let current = if count == 0 {
        0
    } else {
        pagination.page_index() + 1
    };
    format!("{current} of {count}")
}

pub fn page_size_label(page_size: PageSize) -> String {
    format!("Show {page_size}")
}

/// `"<n> Rows"` for the rows on the current page.
pub fn rows_label(table: &UsersTable) -> String {
    format!("{} Rows", table.visible_rows().len())
}

/// Renders the pagination controls below the users table and applies any
/// navigation the user asked for.
pub fn pagination_controls(ui: &mut Ui, table: &mut UsersTable) {
    let pagination = *table.pagination();

    ui.horizontal(|ui| {
        ui.label("Page");
        ui.strong(page_indicator(&pagination));
    });

    ui.horizontal(|ui| {
        let can_previous = pagination.can_previous_page();
        let can_next = pagination.can_next_page();

        if ui.add_enabled(can_previous, Button::new("<<")).clicked() {
            table.first_page();
        }
        if ui.add_enabled(can_previous, Button::new("<")).clicked() {
            table.previous_page();
        }
        if ui.add_enabled(can_next, Button::new(">")).clicked() {
            table.next_page();
        }
        if ui.add_enabled(can_next, Button::new(">>")).clicked() {
            table.last_page();
        }
    });

    let mut page_size = pagination.page_size();
    ComboBox::from_id_salt("page_size")
        .selected_text(page_size_label(page_size))
        .show_ui(ui, |ui| {
            for size in PageSize::ALL {
                ui.selectable_value(&mut page_size, size, page_size_label(size));
            }
        });
    if page_size != pagination.page_size() {
        table.set_page_size(page_size);
    }

    ui.label(rows_label(table));
}
