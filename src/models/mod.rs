pub mod analytics;
pub mod bin;
pub mod error;
pub mod flags;
pub mod metrics;
pub mod notification;
pub mod selection;
pub mod thresholds;
