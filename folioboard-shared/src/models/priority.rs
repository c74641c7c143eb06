/// Priority levels shared by projects and tasks
///
/// Priorities form a closed enumeration on the wire; values outside the
/// known set deserialize to [`Priority::Unknown`] rather than failing.

use serde::{Deserialize, Serialize};

/// Priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority
    Low,

    /// Medium priority (the default for new projects and tasks)
    Medium,

    /// High priority
    High,

    /// Critical priority
    Critical,

    /// Fallback bucket for unrecognized wire values
    #[serde(other)]
    Unknown,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Priority {
    /// All recognized priorities, in ascending order of urgency
    pub const KNOWN: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    /// Converts the priority to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
            Priority::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_as_str() {
        assert_eq!(Priority::Low.as_str(), "low");
        assert_eq!(Priority::Medium.as_str(), "medium");
        assert_eq!(Priority::High.as_str(), "high");
        assert_eq!(Priority::Critical.as_str(), "critical");
    }

    #[test]
    fn test_priority_default_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_unknown_wire_value_falls_back() {
        let parsed: Priority = serde_json::from_str("\"blocker\"").unwrap();
        assert_eq!(parsed, Priority::Unknown);
    }

    #[test]
    fn test_round_trip() {
        for priority in Priority::KNOWN {
            let json = serde_json::to_string(&priority).unwrap();
            let back: Priority = serde_json::from_str(&json).unwrap();
            assert_eq!(back, priority);
        }
    }
}
