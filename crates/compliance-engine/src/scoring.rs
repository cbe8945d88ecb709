//! Weighted score aggregation
//!
//! score = round_half_up(100 * earned / total), where total is the fixed sum
//! of every check's severity and earned the sum over passed checks.

use shared_types::{IssueRecord, RiskLevel};

use crate::rules::CHECKS;

/// Sum of all check severities, taken from the check table (100)
pub fn total_weight() -> u32 {
    CHECKS.iter().map(|c| c.severity).sum()
}

pub fn earned_weight(issues: &[IssueRecord]) -> u32 {
    issues.iter().filter(|i| i.passed).map(|i| i.severity).sum()
}

/// Integer round-half-up of `100 * earned / total`; 0 when total is 0
pub fn percentage(earned: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let earned = earned.min(total) as u64;
    let total = total as u64;
    ((200 * earned + total) / (2 * total)) as u8
}

/// Score a full set of issues against the fixed total weight
pub fn score(issues: &[IssueRecord]) -> u8 {
    percentage(earned_weight(issues), total_weight())
}

pub fn risk_level(score: u8) -> RiskLevel {
    RiskLevel::from_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issues(passed: &[bool]) -> Vec<IssueRecord> {
        CHECKS
            .iter()
            .zip(passed)
            .map(|(check, &passed)| IssueRecord {
                code: check.code.to_string(),
                title: check.title.to_string(),
                description: check.description.to_string(),
                severity: check.severity,
                passed,
            })
            .collect()
    }

    #[test]
    fn test_total_weight_is_table_sum() {
        let sum: u32 = [15, 10, 15, 8, 12, 10, 8, 10, 7, 5].iter().sum();
        assert_eq!(total_weight(), sum);
        assert_eq!(total_weight(), 100);
    }

    #[test]
    fn test_all_pass_and_all_fail() {
        assert_eq!(score(&issues(&[true; 10])), 100);
        assert_eq!(score(&issues(&[false; 10])), 0);
    }

    #[test]
    fn test_rounding() {
        let mut passed = [false; 10];
        passed[0] = true;
        assert_eq!(score(&issues(&passed)), 15);

        let mut passed = [false; 10];
        passed[9] = true;
        assert_eq!(score(&issues(&passed)), 5);

        // 2/3 = 66.66.. -> 67
        assert_eq!(percentage(2, 3), 67);
        // 1/3 = 33.33.. -> 33
        assert_eq!(percentage(1, 3), 33);
        // 1/8 = 12.5 -> 13 (half rounds up)
        assert_eq!(percentage(1, 8), 13);
    }

    #[test]
    fn test_zero_total() {
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn test_risk_level_bands() {
        assert_eq!(risk_level(95), RiskLevel::Low);
        assert_eq!(risk_level(64), RiskLevel::Medium);
        assert_eq!(risk_level(14), RiskLevel::High);
    }
}
