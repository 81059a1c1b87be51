//! Qualitative comparison of solved scenarios.
//!
//! The "secular trends" exercise compares a baseline equilibrium with a
//! perturbed-parameter counterfactual through a fixed set of derived
//! ratios, classifying each change as an increase, a decrease, or no
//! change within a small tolerance. Classification is pure; rendering a
//! table from [`ScenarioComparison::entries`] is the caller's business.

use serde::{Deserialize, Serialize};

use crate::{equilibrium::EquilibriumPoint, steady_state::SteadyState};

/// Tolerance below which a change in a derived ratio counts as no change.
pub const TREND_TOLERANCE: f64 = 1e-6;

/// The sign of a change between two scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Increased,
    Decreased,
    Unchanged,
}

/// Classifies the change from `baseline` to `alternative`.
///
/// Changes within `tolerance` of zero (inclusive) are [`Trend::Unchanged`].
#[must_use]
pub fn classify(baseline: f64, alternative: f64, tolerance: f64) -> Trend {
    let change = alternative - baseline;
    if change > tolerance {
        Trend::Increased
    } else if change < -tolerance {
        Trend::Decreased
    } else {
        Trend::Unchanged
    }
}

/// The derived ratios the comparison tracks, for one solved scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioRatios {
    /// Intangible share of total capital, `H / (H + K)`.
    pub intangible_share: f64,
    pub capital_to_output: f64,
    pub mortgage_to_output: f64,
    pub land_value_to_output: f64,
    pub share_price_to_output: f64,
    /// Skill premium, `w_h / w_l`.
    pub wage_ratio: f64,
}

impl ScenarioRatios {
    #[must_use]
    pub fn from_steady_state(solved: &SteadyState) -> Self {
        let EquilibriumPoint { capital, intangible } = solved.point;
        let e = &solved.equilibrium;

        Self {
            intangible_share: intangible / (intangible + capital),
            capital_to_output: capital / e.output,
            mortgage_to_output: e.mortgage / e.output,
            land_value_to_output: e.land_value / e.output,
            share_price_to_output: e.share_price / e.output,
            wage_ratio: e.wage_high / e.wage_low,
        }
    }
}

/// Per-ratio trend between a baseline and an alternative scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioComparison {
    pub intangible_share: Trend,
    pub capital_to_output: Trend,
    pub mortgage_to_output: Trend,
    pub land_value_to_output: Trend,
    pub share_price_to_output: Trend,
    pub wage_ratio: Trend,
}

impl ScenarioComparison {
    /// The comparison as a named mapping, in a fixed display order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, Trend); 6] {
        [
            ("intangible share", self.intangible_share),
            ("capital / output", self.capital_to_output),
            ("mortgage / output", self.mortgage_to_output),
            ("land value / output", self.land_value_to_output),
            ("share price / output", self.share_price_to_output),
            ("wage ratio", self.wage_ratio),
        ]
    }
}

/// Compares two solved scenarios ratio by ratio at [`TREND_TOLERANCE`].
#[must_use]
pub fn compare_scenarios(baseline: &SteadyState, alternative: &SteadyState) -> ScenarioComparison {
    let base = ScenarioRatios::from_steady_state(baseline);
    let alt = ScenarioRatios::from_steady_state(alternative);

    ScenarioComparison {
        intangible_share: classify(base.intangible_share, alt.intangible_share, TREND_TOLERANCE),
        capital_to_output: classify(
            base.capital_to_output,
            alt.capital_to_output,
            TREND_TOLERANCE,
        ),
        mortgage_to_output: classify(
            base.mortgage_to_output,
            alt.mortgage_to_output,
            TREND_TOLERANCE,
        ),
        land_value_to_output: classify(
            base.land_value_to_output,
            alt.land_value_to_output,
            TREND_TOLERANCE,
        ),
        share_price_to_output: classify(
            base.share_price_to_output,
            alt.share_price_to_output,
            TREND_TOLERANCE,
        ),
        wage_ratio: classify(base.wage_ratio, alt.wage_ratio, TREND_TOLERANCE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_clear_changes() {
        assert_eq!(classify(1.0, 2.0, TREND_TOLERANCE), Trend::Increased);
        assert_eq!(classify(2.0, 1.0, TREND_TOLERANCE), Trend::Decreased);
        assert_eq!(classify(1.5, 1.5, TREND_TOLERANCE), Trend::Unchanged);
    }

    #[test]
    fn change_at_the_tolerance_boundary_is_unchanged() {
        assert_eq!(classify(0.0, 1e-6, 1e-6), Trend::Unchanged);
        assert_eq!(classify(0.0, -1e-6, 1e-6), Trend::Unchanged);
        assert_eq!(classify(0.0, 2e-6, 1e-6), Trend::Increased);
        assert_eq!(classify(0.0, -2e-6, 1e-6), Trend::Decreased);
    }

    #[test]
    fn entries_cover_every_tracked_ratio() {
        let comparison = ScenarioComparison {
            intangible_share: Trend::Increased,
            capital_to_output: Trend::Decreased,
            mortgage_to_output: Trend::Unchanged,
            land_value_to_output: Trend::Increased,
            share_price_to_output: Trend::Increased,
            wage_ratio: Trend::Increased,
        };

        let entries = comparison.entries();

        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0], ("intangible share", Trend::Increased));
        assert_eq!(entries[2], ("mortgage / output", Trend::Unchanged));
    }
}
