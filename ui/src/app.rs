use crate::{state::State, widgets};

pub struct UsersApp {
    pub state: State,
}

impl UsersApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for UsersApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The first frame is the mount: kick off the one and only fetch.
        self.state.start_fetch(ctx);
        self.state.poll_fetch();

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::users_page(ui, &mut self.state.users_view);
        });
    }
}
