//! Pure transforms from analysis results to renderable views.
//!
//! Nothing here mutates its input; every function is safe to re-run on each
//! render pass.

use crate::analysis::{AnalysisResult, FetchOutcome, ImpactLevel, Recommendation};

/// Categorical series for the spending breakdown chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    /// Category names, in breakdown order.
    pub labels: Vec<String>,
    /// Amount per category, aligned with `labels`.
    pub values: Vec<i64>,
}

/// Display color for impact badges and the score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    /// High impact, or a score below 60.
    Red,
    /// Medium impact, or a score in 60-79.
    Yellow,
    /// Low impact, or a score of 80 and above.
    Green,
    /// Unrecognized impact level.
    Gray,
}

/// A recommendation annotated for display.
#[derive(Debug, Clone)]
pub struct RecommendationView<'a> {
    /// The underlying recommendation.
    pub recommendation: &'a Recommendation,
    /// Badge color derived from its impact level.
    pub color: BadgeColor,
}

/// Build the chart series, preserving the breakdown's insertion order.
pub fn category_series(result: &AnalysisResult) -> ChartSeries {
    ChartSeries {
        labels: result.data.category_breakdown.keys().cloned().collect(),
        values: result.data.category_breakdown.values().copied().collect(),
    }
}

/// Recommendations sorted by ascending priority (lower = more urgent),
/// each annotated with its badge color. The sort is stable, so equal
/// priorities keep service order.
pub fn ranked_recommendations(result: &AnalysisResult) -> Vec<RecommendationView<'_>> {
    let mut views: Vec<_> = result
        .recommendations
        .iter()
        .map(|r| RecommendationView {
            recommendation: r,
            color: impact_color(r.impact),
        })
        .collect();
    views.sort_by_key(|v| v.recommendation.priority);
    views
}

/// Badge color for an impact level.
pub fn impact_color(impact: ImpactLevel) -> BadgeColor {
    match impact {
        ImpactLevel::High => BadgeColor::Red,
        ImpactLevel::Medium => BadgeColor::Yellow,
        ImpactLevel::Low => BadgeColor::Green,
        ImpactLevel::Other => BadgeColor::Gray,
    }
}

/// Band for the health score: 80 and above green, 60-79 yellow, below red.
pub fn score_band(score: u8) -> BadgeColor {
    if score >= 80 {
        BadgeColor::Green
    } else if score >= 60 {
        BadgeColor::Yellow
    } else {
        BadgeColor::Red
    }
}

/// Render a full fetch outcome as terminal text.
///
/// Degraded outcomes lead with a sample-data notice so the outage is visible
/// instead of silently masked.
pub fn render_text(outcome: &FetchOutcome) -> String {
    let result = outcome.result();
    let mut out = String::new();

    if let Some(reason) = outcome.degraded_reason() {
        out.push_str(&format!("note: showing sample data ({})\n\n", reason));
    }

    out.push_str(&format!(
        "Financial health score: {} / 100 [{:?}]\n\n",
        result.score,
        score_band(result.score)
    ));

    let series = category_series(result);
    if !series.labels.is_empty() {
        out.push_str("Spending by category:\n");
        for (label, value) in series.labels.iter().zip(&series.values) {
            out.push_str(&format!("  {:<20} {}\n", label, value));
        }
        out.push('\n');
    }

    out.push_str(&format!("{}\n\n", result.analysis));

    if !result.insights.is_empty() {
        out.push_str("Insights:\n");
        for insight in &result.insights {
            out.push_str(&format!("  - {}\n", insight));
        }
        out.push('\n');
    }

    let ranked = ranked_recommendations(result);
    if !ranked.is_empty() {
        out.push_str("Recommendations:\n");
        for view in &ranked {
            let rec = view.recommendation;
            out.push_str(&format!(
                "  {}. [{:?}] {} - {}\n",
                rec.priority, view.color, rec.title, rec.description
            ));
            if let Some(savings) = rec.potential_savings {
                out.push_str(&format!("     potential savings: {}\n", savings));
            }
        }
        out.push('\n');
    }

    if !result.risk_factors.is_empty() {
        out.push_str("Risk factors:\n");
        for risk in &result.risk_factors {
            out.push_str(&format!("  - {}\n", risk));
        }
        out.push('\n');
    }

    if !result.opportunities.is_empty() {
        out.push_str("Opportunities:\n");
        for opportunity in &result.opportunities {
            out.push_str(&format!("  - {}\n", opportunity));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fallback_result;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_series_preserves_breakdown_order() {
        let result = fallback_result();
        let series = category_series(&result);

        let expected: Vec<String> = result.data.category_breakdown.keys().cloned().collect();
        assert_eq!(series.labels, expected);
        assert_eq!(series.values.len(), series.labels.len());
        assert_eq!(series.values[0], 3_200_000);
    }

    #[test]
    fn test_series_does_not_mutate_input() {
        let result = fallback_result();
        let before = result.clone();
        let _ = category_series(&result);
        let _ = ranked_recommendations(&result);
        assert_eq!(result, before);
    }

    #[test]
    fn test_impact_color_mapping() {
        assert_eq!(impact_color(ImpactLevel::High), BadgeColor::Red);
        assert_eq!(impact_color(ImpactLevel::Medium), BadgeColor::Yellow);
        assert_eq!(impact_color(ImpactLevel::Low), BadgeColor::Green);
        assert_eq!(impact_color(ImpactLevel::Other), BadgeColor::Gray);
    }

    #[test]
    fn test_score_banding() {
        assert_eq!(score_band(100), BadgeColor::Green);
        assert_eq!(score_band(80), BadgeColor::Green);
        assert_eq!(score_band(79), BadgeColor::Yellow);
        assert_eq!(score_band(60), BadgeColor::Yellow);
        assert_eq!(score_band(59), BadgeColor::Red);
        assert_eq!(score_band(0), BadgeColor::Red);
    }

    #[test]
    fn test_recommendations_sorted_by_priority() {
        let mut result = fallback_result();
        result.recommendations.reverse();

        let ranked = ranked_recommendations(&result);
        let priorities: Vec<_> = ranked.iter().map(|v| v.recommendation.priority).collect();
        assert_eq!(priorities, vec![1, 2]);
        assert_eq!(ranked[0].color, BadgeColor::Red);
        assert_eq!(ranked[1].color, BadgeColor::Yellow);
    }

    #[test]
    fn test_render_text_flags_degraded_outcome() {
        let degraded = FetchOutcome::Degraded {
            result: fallback_result(),
            reason: "API error: 503 - down".to_string(),
        };
        let text = render_text(&degraded);
        assert!(text.starts_with("note: showing sample data"));
        assert!(text.contains("503"));

        let live = FetchOutcome::Live(fallback_result());
        assert!(!render_text(&live).contains("sample data"));
    }
}
