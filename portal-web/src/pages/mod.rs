mod dashboard;
mod layout;
mod log_activity;

pub use dashboard::Dashboard;
pub use layout::AppLayout;
pub use log_activity::LogActivity;
