use serde::{Deserialize, Serialize};

/// Visual status of a KPI card (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Warning,
    Neutral,
}

impl IndicatorStatus {
    /// Extra CSS modifier for the stat-card root, empty for neutral.
    pub fn card_modifier(self) -> &'static str {
        match self {
            IndicatorStatus::Good => "stat-card--success",
            IndicatorStatus::Bad => "stat-card--error",
            IndicatorStatus::Warning => "stat-card--warning",
            IndicatorStatus::Neutral => "",
        }
    }
}

/// Direction of a period-over-period change, parsed from the sign of a
/// preformatted change label ("+12%", "-15%").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn from_change_label(label: &str) -> Self {
        match label.trim().chars().next() {
            Some('+') => Trend::Up,
            Some('-') => Trend::Down,
            _ => Trend::Flat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_follows_change_sign() {
        assert_eq!(Trend::from_change_label("+12%"), Trend::Up);
        assert_eq!(Trend::from_change_label("-0.3%"), Trend::Down);
        assert_eq!(Trend::from_change_label("98.2%"), Trend::Flat);
        assert_eq!(Trend::from_change_label(""), Trend::Flat);
    }
}
