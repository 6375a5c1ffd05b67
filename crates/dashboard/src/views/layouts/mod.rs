pub mod dashboard_layout;

pub use dashboard_layout::DashboardLayout;
