//! egui front end for the users table: app shell, state wiring and widgets.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod state;
pub mod widgets;

pub use app::UsersApp;
