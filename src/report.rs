//! Fixed-template customer report rendered from one summary row.

use crate::summary::{ProbabilityTier, SummaryRow};

/// Coarse action tier shown in the report header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportTier {
    /// High-probability customers.
    Tier1,
    /// Medium-probability customers.
    Tier2,
    /// Everyone below the Medium breakpoint.
    Tier3,
}

impl ReportTier {
    /// Map a probability tier onto the report tier.
    ///
    /// Low and Very Low intentionally share Tier 3: the historical
    /// report never distinguished them, and collapsing stays until the
    /// campaign owners sign off on a four-tier split.
    pub fn from_probability_tier(tier: ProbabilityTier) -> Self {
        match tier {
            ProbabilityTier::High => Self::Tier1,
            ProbabilityTier::Medium => Self::Tier2,
            ProbabilityTier::Low | ProbabilityTier::VeryLow => Self::Tier3,
        }
    }

    /// Header label for the tier.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tier1 => "Tier 1",
            Self::Tier2 => "Tier 2",
            Self::Tier3 => "Tier 3",
        }
    }
}

/// Render the two-table report for one summary row.
///
/// Pure function of the row; the percent in the header comes from the
/// carried probability, rounded to one decimal place.
pub fn render(row: &SummaryRow) -> String {
    let tier = ReportTier::from_probability_tier(row.tier);
    let percent = (row.probability * 1000.0).round() / 10.0;
    format!(
        "**{tier}\n\
         Customer: Subscription Probability {percent:.1}%**\n\
         \n\
         | **Age** | **Job** | **Marital Status** | **Education** |\n\
         |---------|---------|--------------------|---------------|\n\
         | {age} | {job} | {marital} | {education} |\n\
         \n\
         | **Previously Subscribed?** | **Has Defaulted?** | **Prediction Outcome** |\n\
         |----------------------------|--------------------|------------------------|\n\
         | {subscribed} | {defaulted} | {outcome} |\n",
        tier = tier.label(),
        age = row.age,
        job = row.job,
        marital = row.marital_status,
        education = row.education,
        subscribed = row.previously_subscribed,
        defaulted = row.has_defaulted,
        outcome = row.prediction_outcome,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(probability: f32) -> SummaryRow {
        SummaryRow {
            age: 35.0,
            job: "admin".into(),
            marital_status: "Single".into(),
            education: "tertiary".into(),
            has_defaulted: "No".into(),
            previously_subscribed: "Yes".into(),
            contact_quarter: "Q2".into(),
            prediction_outcome: "Will Subscribe".into(),
            probability_label: crate::summary::ProbabilityTier::display(probability),
            probability,
            tier: ProbabilityTier::from_probability(probability),
        }
    }

    #[test]
    fn tier_mapping_matches_the_probability_tiers() {
        use ProbabilityTier::*;
        assert_eq!(ReportTier::from_probability_tier(High), ReportTier::Tier1);
        assert_eq!(ReportTier::from_probability_tier(Medium), ReportTier::Tier2);
        assert_eq!(ReportTier::from_probability_tier(Low), ReportTier::Tier3);
        assert_eq!(ReportTier::from_probability_tier(VeryLow), ReportTier::Tier3);
    }

    #[test]
    fn header_carries_tier_and_one_decimal_percent() {
        let report = render(&row(0.91));
        assert!(report.starts_with("**Tier 1\n"));
        assert!(report.contains("Subscription Probability 91.0%"));
    }

    #[test]
    fn low_and_very_low_rows_render_the_same_tier() {
        assert!(render(&row(0.4)).starts_with("**Tier 3\n"));
        assert!(render(&row(0.1)).starts_with("**Tier 3\n"));
    }

    #[test]
    fn tables_carry_the_summary_fields() {
        let report = render(&row(0.95));
        assert!(report.contains("| 35 | admin | Single | tertiary |"));
        assert!(report.contains("| Yes | No | Will Subscribe |"));
    }

    #[test]
    fn fractional_probability_keeps_its_decimal() {
        let report = render(&row(0.854));
        assert!(report.contains("Subscription Probability 85.4%"));
    }
}
