//! Advisory per-inference cost ceiling.
//!
//! The guard only reports; it never blocks or alters a response.

use serde::Serialize;

/// Outcome of comparing an estimated cost against the configured ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BudgetStatus {
    WithinLimit,
    Exceeded { cost_usd: f64, limit_usd: f64 },
}

impl BudgetStatus {
    pub fn is_exceeded(&self) -> bool {
        matches!(self, BudgetStatus::Exceeded { .. })
    }
}

/// Compare `cost_usd` against `limit_usd`. Exceeded only when strictly greater.
pub fn check_budget(cost_usd: f64, limit_usd: f64) -> BudgetStatus {
    if cost_usd > limit_usd {
        BudgetStatus::Exceeded {
            cost_usd,
            limit_usd,
        }
    } else {
        BudgetStatus::WithinLimit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exceeded_when_strictly_greater() {
        let status = check_budget(0.001, 0.0005);
        assert_eq!(
            status,
            BudgetStatus::Exceeded {
                cost_usd: 0.001,
                limit_usd: 0.0005
            }
        );
        assert!(status.is_exceeded());
    }

    #[test]
    fn test_equal_cost_is_within_limit() {
        assert_eq!(check_budget(0.001, 0.001), BudgetStatus::WithinLimit);
    }

    #[test]
    fn test_zero_cost_with_zero_limit_is_within_limit() {
        assert!(!check_budget(0.0, 0.0).is_exceeded());
    }
}
