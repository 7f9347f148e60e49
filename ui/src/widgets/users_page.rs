//! Top-level page: heading plus whichever view state is current.

use egui::Ui;
use userboard_business::UsersView;

use super::{error_view, pagination_controls, users_table};

pub const PAGE_HEADING: &str = "Test Users Data from jsonplaceholder";

/// Renders the users page for the current view state.
pub fn users_page(ui: &mut Ui, view: &mut UsersView) {
    match view {
        UsersView::Loading => {
            ui.heading(PAGE_HEADING);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading users...");
            });
        }
        UsersView::Error(err) => {
            error_view(ui, err.message());
        }
        UsersView::Ready(table) => {
            ui.heading(PAGE_HEADING);
            ui.add_space(8.0);
            users_table(ui, table);
            ui.add_space(5.0);
            pagination_controls(ui, table);
        }
    }
}
