use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Success,
    Info,
}

impl Severity {
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Critical => "severity-critical",
            Self::Warning => "severity-warning",
            Self::Success => "severity-success",
            Self::Info => "severity-info",
        }
    }

    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Critical | Self::Warning => "\u{26a0}\u{fe0f}",
            Self::Success => "\u{2705}",
            Self::Info => "\u{2139}\u{fe0f}",
        }
    }
}

/// A recent alert shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub severity: Severity,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

/// The alert feed shown at start-up, timestamped relative to `now`
pub fn seed_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    let entry = |id, severity, message: &str, ago: Duration| Notification {
        id,
        severity,
        message: message.to_string(),
        raised_at: now - ago,
    };

    vec![
        entry(
            1,
            Severity::Critical,
            "Bin BIN001 at Main Plaza is 85% full",
            Duration::minutes(5),
        ),
        entry(
            2,
            Severity::Warning,
            "Polythene stock running low (23 units remaining)",
            Duration::minutes(15),
        ),
        entry(
            3,
            Severity::Success,
            "Route optimization completed - 15% fuel savings",
            Duration::hours(1),
        ),
        entry(
            4,
            Severity::Info,
            "Bin BIN004 door opened automatically",
            Duration::hours(2),
        ),
    ]
}
