pub mod admin;
pub mod analytics;
pub mod chart;
pub mod dashboard;
pub mod map;
pub mod stat_card;
pub mod status_badge;
pub mod tabs;
pub mod threshold_slider;
pub mod toasts;

pub use admin::AdminPanel;
pub use analytics::Analytics;
pub use dashboard::Dashboard;
pub use map::BinMap;
pub use tabs::TabBar;
pub use toasts::ToastStack;
