pub mod use_fleet;
pub mod use_tab;
pub mod use_toasts;
