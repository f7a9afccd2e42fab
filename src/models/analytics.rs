use super::bin::WasteType;

/// Share of collected waste per stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WasteShare {
    pub waste_type: WasteType,
    /// Collected this month, kg
    pub amount_kg: u32,
    pub percentage: u8,
    /// Change against last month, percent
    pub trend: i8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyCollection {
    pub month: &'static str,
    pub collections: u32,
    pub efficiency: f64,
    pub cost: u32,
}

impl MonthlyCollection {
    /// Monthly collection count that fills a trend bar
    pub const BAR_CAPACITY: u32 = 250;

    pub fn bar_percent(&self) -> f64 {
        (f64::from(self.collections) / f64::from(Self::BAR_CAPACITY) * 100.0).min(100.0)
    }
}

/// Health rating of a bin's uptime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UptimeRating {
    Good,
    Fair,
    Poor,
}

impl UptimeRating {
    pub fn from_uptime(uptime: f64) -> Self {
        if uptime > 98.0 {
            Self::Good
        } else if uptime > 95.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Good => "uptime-good",
            Self::Fair => "uptime-fair",
            Self::Poor => "uptime-poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueLevel {
    None,
    Few,
    Many,
}

impl IssueLevel {
    pub const fn from_count(issues: u32) -> Self {
        match issues {
            0 => Self::None,
            1 | 2 => Self::Few,
            _ => Self::Many,
        }
    }

    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::None => "issues-none",
            Self::Few => "issues-few",
            Self::Many => "issues-many",
        }
    }
}

/// Historical performance of one bin, keyed by bin id
#[derive(Debug, Clone, PartialEq)]
pub struct BinPerformance {
    pub bin_id: &'static str,
    pub collections: u32,
    pub uptime: f64,
    pub issues: u32,
}

impl BinPerformance {
    pub fn uptime_rating(&self) -> UptimeRating {
        UptimeRating::from_uptime(self.uptime)
    }

    pub const fn issue_level(&self) -> IssueLevel {
        IssueLevel::from_count(self.issues)
    }
}

pub fn waste_distribution() -> Vec<WasteShare> {
    let share = |waste_type, amount_kg, percentage, trend| WasteShare {
        waste_type,
        amount_kg,
        percentage,
        trend,
    };

    vec![
        share(WasteType::Mixed, 1245, 35, 12),
        share(WasteType::Plastic, 890, 25, -5),
        share(WasteType::Organic, 670, 19, 8),
        share(WasteType::Paper, 520, 15, -3),
        share(WasteType::Medical, 215, 6, 15),
    ]
}

pub fn collection_history() -> Vec<MonthlyCollection> {
    let month = |month, collections, efficiency, cost| MonthlyCollection {
        month,
        collections,
        efficiency,
        cost,
    };

    vec![
        month("Jan", 145, 92.0, 2400),
        month("Feb", 162, 89.0, 2650),
        month("Mar", 178, 94.0, 2320),
        month("Apr", 190, 91.0, 2580),
        month("May", 203, 96.0, 2200),
        month("Jun", 218, 93.0, 2450),
    ]
}

pub fn bin_performance() -> Vec<BinPerformance> {
    let perf = |bin_id, collections, uptime, issues| BinPerformance {
        bin_id,
        collections,
        uptime,
        issues,
    };

    vec![
        perf("BIN001", 45, 98.5, 2),
        perf("BIN002", 32, 99.2, 0),
        perf("BIN003", 67, 97.8, 3),
        perf("BIN004", 38, 95.1, 5),
        perf("BIN005", 89, 99.7, 1),
    ]
}

/// KPI figures for the analytics surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnalyticsSummary {
    pub total_waste_kg: u32,
    pub average_efficiency: f64,
    pub total_collections: u32,
    /// Highest minus lowest monthly cost
    pub cost_savings: u32,
}

impl AnalyticsSummary {
    pub fn compute(waste: &[WasteShare], history: &[MonthlyCollection]) -> Self {
        let average_efficiency = if history.is_empty() {
            0.0
        } else {
            history.iter().map(|m| m.efficiency).sum::<f64>() / history.len() as f64
        };

        let highest = history.iter().map(|m| m.cost).max().unwrap_or(0);
        let lowest = history.iter().map(|m| m.cost).min().unwrap_or(0);

        Self {
            total_waste_kg: waste.iter().map(|w| w.amount_kg).sum(),
            average_efficiency,
            total_collections: history.iter().map(|m| m.collections).sum(),
            cost_savings: highest - lowest,
        }
    }
}
