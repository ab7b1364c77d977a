pub mod app;
pub mod event;
pub mod handlers;
pub mod keys;
pub mod layout;
pub mod panels;
pub mod popups;
pub mod ui;

pub use app::DashboardApp;
pub use handlers::run_dashboard;
