use crate::models::error::AppError;
use crate::models::flags::SystemFlag;
use crate::models::notification::Severity;

/// Fire-and-forget operator actions. None of them change fleet state; each
/// only produces an [`Acknowledgment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    Empty(String),
    Restart(String),
    CreateRoute(String),
    OptimizeRoutes,
    DispatchTeam,
    ExportData,
    SystemBackup,
    ManageUsers,
    BulkAction,
    CenterMap,
    MapLayers,
    ZoomIn,
    ZoomOut,
}

impl AdminAction {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Empty(_) => "Empty",
            Self::Restart(_) => "Restart",
            Self::CreateRoute(_) => "Create Route",
            Self::OptimizeRoutes => "Optimize Routes",
            Self::DispatchTeam => "Dispatch Team",
            Self::ExportData => "Export Data",
            Self::SystemBackup => "System Backup",
            Self::ManageUsers => "Manage Users",
            Self::BulkAction => "Bulk Action",
            Self::CenterMap => "Center Map",
            Self::MapLayers => "Map Layers",
            Self::ZoomIn => "Zoom In",
            Self::ZoomOut => "Zoom Out",
        }
    }

    fn target_bin(&self) -> Option<&str> {
        match self {
            Self::Empty(id) | Self::Restart(id) | Self::CreateRoute(id) => Some(id),
            _ => None,
        }
    }
}

/// User-visible confirmation shown as a toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

/// Builds the acknowledgment for `action`.
///
/// Per-bin actions name the bin; everything else mentions the current bulk
/// selection when there is one.
pub fn acknowledge(action: &AdminAction, selected: usize) -> Acknowledgment {
    let label = action.label();
    let target = match (action.target_bin(), selected) {
        (Some(id), _) => format!(" for bin {id}"),
        (None, 0) => String::new(),
        (None, 1) => " for 1 selected bin".to_string(),
        (None, n) => format!(" for {n} selected bins"),
    };

    Acknowledgment {
        severity: Severity::Info,
        title: format!("{label} Initiated"),
        description: format!("{label}{target} has been started"),
    }
}

pub fn flag_acknowledgment(flag: SystemFlag, enabled: bool) -> Acknowledgment {
    let state = if enabled { "enabled" } else { "disabled" };

    Acknowledgment {
        severity: Severity::Success,
        title: "System Updated".to_string(),
        description: format!("{} has been {state}", flag.title().to_lowercase()),
    }
}

pub fn rejection(error: &AppError) -> Acknowledgment {
    Acknowledgment {
        severity: Severity::Warning,
        title: "Threshold Not Applied".to_string(),
        description: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_bin_action_names_bin() {
        let ack = acknowledge(&AdminAction::Empty("BIN003".to_string()), 4);
        assert_eq!(ack.title, "Empty Initiated");
        assert_eq!(ack.description, "Empty for bin BIN003 has been started");
    }

    #[test]
    fn test_global_action_mentions_selection() {
        let ack = acknowledge(&AdminAction::BulkAction, 3);
        assert_eq!(ack.title, "Bulk Action Initiated");
        assert_eq!(ack.description, "Bulk Action for 3 selected bins has been started");

        let ack = acknowledge(&AdminAction::SystemBackup, 1);
        assert_eq!(ack.description, "System Backup for 1 selected bin has been started");
    }

    #[test]
    fn test_map_actions() {
        let ack = acknowledge(&AdminAction::CreateRoute("BIN004".to_string()), 0);
        assert_eq!(ack.title, "Create Route Initiated");
        assert_eq!(ack.description, "Create Route for bin BIN004 has been started");

        let ack = acknowledge(&AdminAction::ZoomIn, 0);
        assert_eq!(ack.description, "Zoom In has been started");
    }

    #[test]
    fn test_global_action_without_selection() {
        let ack = acknowledge(&AdminAction::OptimizeRoutes, 0);
        assert_eq!(ack.description, "Optimize Routes has been started");
    }

    #[test]
    fn test_flag_acknowledgment() {
        let ack = flag_acknowledgment(SystemFlag::EmergencyMode, true);
        assert_eq!(ack.title, "System Updated");
        assert_eq!(ack.description, "emergency mode has been enabled");

        let ack = flag_acknowledgment(SystemFlag::AutoEmpty, false);
        assert_eq!(ack.description, "auto empty has been disabled");
    }

    #[test]
    fn test_rejection_carries_error_text() {
        let err = AppError::ThresholdOrder {
            critical: 60,
            moderate: 70,
        };
        let ack = rejection(&err);
        assert_eq!(ack.severity, Severity::Warning);
        assert!(ack.description.contains("must be above moderate level"));
    }
}
