use serde::{Deserialize, Serialize};

/// Automation and alerting switches shown on the admin surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemFlag {
    AutoEmpty,
    BagReplacement,
    RouteOptimization,
    Alerts,
    EmergencyMode,
}

impl SystemFlag {
    pub const fn title(&self) -> &'static str {
        match self {
            Self::AutoEmpty => "Auto Empty",
            Self::BagReplacement => "Bag Replacement",
            Self::RouteOptimization => "Route Optimization",
            Self::Alerts => "Real-time Alerts",
            Self::EmergencyMode => "Emergency Mode",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::AutoEmpty => "Automatically empty critical bins",
            Self::BagReplacement => "Auto replace polythene bags",
            Self::RouteOptimization => "AI-powered route planning",
            Self::Alerts => "Push notifications enabled",
            Self::EmergencyMode => "Override all automations",
        }
    }

    /// Automation flags first, then alerting flags
    pub const fn automation() -> &'static [Self] {
        &[Self::AutoEmpty, Self::BagReplacement, Self::RouteOptimization]
    }

    pub const fn alerting() -> &'static [Self] {
        &[Self::Alerts, Self::EmergencyMode]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemFlags {
    pub auto_empty: bool,
    pub bag_replacement: bool,
    pub route_optimization: bool,
    pub alerts: bool,
    pub emergency_mode: bool,
}

impl Default for SystemFlags {
    fn default() -> Self {
        Self {
            auto_empty: true,
            bag_replacement: true,
            route_optimization: true,
            alerts: true,
            emergency_mode: false,
        }
    }
}

impl SystemFlags {
    pub const fn get(&self, flag: SystemFlag) -> bool {
        match flag {
            SystemFlag::AutoEmpty => self.auto_empty,
            SystemFlag::BagReplacement => self.bag_replacement,
            SystemFlag::RouteOptimization => self.route_optimization,
            SystemFlag::Alerts => self.alerts,
            SystemFlag::EmergencyMode => self.emergency_mode,
        }
    }

    /// Flips `flag` and returns its new value
    pub fn toggle(&mut self, flag: SystemFlag) -> bool {
        let slot = match flag {
            SystemFlag::AutoEmpty => &mut self.auto_empty,
            SystemFlag::BagReplacement => &mut self.bag_replacement,
            SystemFlag::RouteOptimization => &mut self.route_optimization,
            SystemFlag::Alerts => &mut self.alerts,
            SystemFlag::EmergencyMode => &mut self.emergency_mode,
        };
        *slot = !*slot;
        *slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let flags = SystemFlags::default();
        assert!(flags.get(SystemFlag::AutoEmpty));
        assert!(flags.get(SystemFlag::Alerts));
        assert!(!flags.get(SystemFlag::EmergencyMode));
    }

    #[test]
    fn test_toggle_returns_new_value() {
        let mut flags = SystemFlags::default();
        assert!(flags.toggle(SystemFlag::EmergencyMode));
        assert!(flags.emergency_mode);
        assert!(!flags.toggle(SystemFlag::EmergencyMode));

        // Other flags untouched
        assert_eq!(
            SystemFlags {
                emergency_mode: false,
                ..flags
            },
            SystemFlags::default()
        );
    }
}
