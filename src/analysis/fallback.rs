//! Deterministic fallback analysis served when the service is unreachable.

use indexmap::IndexMap;

use super::types::{AnalysisData, AnalysisResult, ImpactLevel, Recommendation};

/// Health score reported by the fallback analysis.
pub const FALLBACK_SCORE: u8 = 75;

/// Total spending reported by the fallback analysis.
pub const FALLBACK_TOTAL_SPENDING: i64 = 8_000_000;

/// Build the fixed fallback result.
///
/// Identical on every call and for every failure cause, so the UI always has
/// renderable data.
pub fn fallback_result() -> AnalysisResult {
    let mut category_breakdown = IndexMap::new();
    category_breakdown.insert("Food & Dining".to_string(), 3_200_000);
    category_breakdown.insert("Transport".to_string(), 1_200_000);
    category_breakdown.insert("Housing".to_string(), 2_000_000);
    category_breakdown.insert("Entertainment".to_string(), 800_000);
    category_breakdown.insert("Other".to_string(), 800_000);

    AnalysisResult {
        analysis: "Based on your spending history, your habits are broadly reasonable. \
                   A few adjustments would still strengthen your personal finances."
            .to_string(),
        insights: vec![
            "Food and dining account for 40% of total spending".to_string(),
            "Income is stable month over month".to_string(),
            "Around 15% of income could still be saved".to_string(),
        ],
        recommendations: vec![
            Recommendation {
                kind: "spending_reduction".to_string(),
                title: "Cut food and dining costs".to_string(),
                description: "Cooking at home could save around 500,000 per month".to_string(),
                impact: ImpactLevel::High,
                priority: 1,
                potential_savings: Some(500_000),
            },
            Recommendation {
                kind: "savings".to_string(),
                title: "Raise your savings rate".to_string(),
                description: "Target saving 20% of monthly income".to_string(),
                impact: ImpactLevel::Medium,
                priority: 2,
                potential_savings: None,
            },
        ],
        risk_factors: vec![
            "Discretionary spending is trending up".to_string(),
            "No emergency fund in place".to_string(),
        ],
        opportunities: vec![
            "Move idle cash into a savings fund".to_string(),
            "Look for a secondary income stream".to_string(),
        ],
        score: FALLBACK_SCORE,
        data: AnalysisData {
            total_spending: FALLBACK_TOTAL_SPENDING,
            category_breakdown,
        },
    }
}
