use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Four-way alert classification, declared in ascending risk order.
///
/// The stored level is always derived from the overall score via
/// [`AlertLevel::from_score`]. The thresholds are a published contract
/// consumed by dashboards and notifications; do not move them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum AlertLevel {
    Green,
    Yellow,
    Orange,
    Red,
}

impl AlertLevel {
    /// `>= 80` Green, `>= 60` Yellow, `>= 40` Orange, below that Red.
    /// Higher scores mean a safer business.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Green
        } else if score >= 60.0 {
            Self::Yellow
        } else if score >= 40.0 {
            Self::Orange
        } else {
            Self::Red
        }
    }

    /// Parses a model-reported label, tolerating case and padding.
    pub fn parse_reported(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "GREEN" => Some(Self::Green),
            "YELLOW" => Some(Self::Yellow),
            "ORANGE" => Some(Self::Orange),
            "RED" => Some(Self::Red),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Orange => "ORANGE",
            Self::Red => "RED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn parse_reported(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "HIGH" => Some(Self::High),
            "MEDIUM" => Some(Self::Medium),
            "LOW" => Some(Self::Low),
            _ => None,
        }
    }
}

/// One scored dimension of the diagnosis plus its one-line narrative trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskComponent {
    pub score: f64,
    pub trend: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskComponents {
    pub sales: RiskComponent,
    pub customer: RiskComponent,
    pub market: RiskComponent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

/// The classified outcome of one diagnosis run. Scores are clamped to
/// `0.0..=100.0` and `alert_level` matches `overall_score` by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiagnosisResult {
    pub overall_score: f64,
    pub alert_level: AlertLevel,
    pub components: RiskComponents,
    pub recommendations: Vec<Recommendation>,
    pub insights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_orange_boundary() {
        assert_eq!(AlertLevel::from_score(39.0), AlertLevel::Red);
        assert_eq!(AlertLevel::from_score(39.999), AlertLevel::Red);
        assert_eq!(AlertLevel::from_score(40.0), AlertLevel::Orange);
    }

    #[test]
    fn orange_yellow_boundary() {
        assert_eq!(AlertLevel::from_score(59.0), AlertLevel::Orange);
        assert_eq!(AlertLevel::from_score(60.0), AlertLevel::Yellow);
    }

    #[test]
    fn yellow_green_boundary() {
        assert_eq!(AlertLevel::from_score(79.0), AlertLevel::Yellow);
        assert_eq!(AlertLevel::from_score(80.0), AlertLevel::Green);
    }

    #[test]
    fn extremes() {
        assert_eq!(AlertLevel::from_score(0.0), AlertLevel::Red);
        assert_eq!(AlertLevel::from_score(100.0), AlertLevel::Green);
    }

    #[test]
    fn levels_order_by_ascending_risk() {
        assert!(AlertLevel::Green < AlertLevel::Yellow);
        assert!(AlertLevel::Yellow < AlertLevel::Orange);
        assert!(AlertLevel::Orange < AlertLevel::Red);
    }

    #[test]
    fn reported_labels_parse_loosely() {
        assert_eq!(AlertLevel::parse_reported(" green "), Some(AlertLevel::Green));
        assert_eq!(AlertLevel::parse_reported("RED"), Some(AlertLevel::Red));
        assert_eq!(AlertLevel::parse_reported("blue"), None);
        assert_eq!(Priority::parse_reported("high"), Some(Priority::High));
        assert_eq!(Priority::parse_reported("urgent"), None);
    }

    #[test]
    fn levels_serialize_screaming() {
        assert_eq!(serde_json::to_string(&AlertLevel::Yellow).unwrap(), "\"YELLOW\"");
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"MEDIUM\"");
    }
}
