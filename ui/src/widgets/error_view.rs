use egui::{Response, Ui};

/// Replaces the whole page when the users fetch failed: just the error text,
/// no table and no retry.
pub fn error_view(ui: &mut Ui, message: &str) -> Response {
    ui.label(message)
}
