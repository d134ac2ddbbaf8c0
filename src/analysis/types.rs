use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::session::Session;

/// Reporting window for an analysis request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    /// The current week.
    Week,
    /// The current month.
    #[default]
    Month,
    /// The current quarter.
    Quarter,
    /// The current year.
    Year,
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeRange::Week => write!(f, "week"),
            TimeRange::Month => write!(f, "month"),
            TimeRange::Quarter => write!(f, "quarter"),
            TimeRange::Year => write!(f, "year"),
        }
    }
}

impl std::str::FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "quarter" => Ok(TimeRange::Quarter),
            "year" => Ok(TimeRange::Year),
            _ => Err(format!("Unknown time range: {}", s)),
        }
    }
}

/// Kind of analysis to request from the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    /// Where the money goes.
    #[default]
    SpendingPattern,
    /// How to save more.
    SavingsAdvice,
    /// How to allocate the budget better.
    BudgetOptimization,
}

impl std::fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisType::SpendingPattern => write!(f, "spending_pattern"),
            AnalysisType::SavingsAdvice => write!(f, "savings_advice"),
            AnalysisType::BudgetOptimization => write!(f, "budget_optimization"),
        }
    }
}

impl std::str::FromStr for AnalysisType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spending_pattern" => Ok(AnalysisType::SpendingPattern),
            "savings_advice" => Ok(AnalysisType::SavingsAdvice),
            "budget_optimization" => Ok(AnalysisType::BudgetOptimization),
            _ => Err(format!("Unknown analysis type: {}", s)),
        }
    }
}

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    /// User the analysis is for.
    pub user_id: String,
    /// Reporting window.
    pub time_range: TimeRange,
    /// Kind of analysis.
    pub analysis_type: AnalysisType,
}

impl AnalysisRequest {
    /// Build a request for the given session's user.
    pub fn for_session(session: &Session, time_range: TimeRange, analysis_type: AnalysisType) -> Self {
        Self {
            user_id: session.user_id.clone(),
            time_range,
            analysis_type,
        }
    }
}

/// Severity/benefit tag on a recommendation.
///
/// The service may send values outside the known set; those deserialize to
/// `Other` and render with a neutral color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    /// Minor effect.
    Low,
    /// Moderate effect.
    #[default]
    Medium,
    /// Major effect.
    High,
    /// Anything the service sends that we do not recognize.
    #[serde(other)]
    Other,
}

/// A single advisory item from the analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Recommendation category (e.g., "spending_reduction").
    #[serde(rename = "type")]
    pub kind: String,
    /// Short headline.
    pub title: String,
    /// Longer explanation.
    pub description: String,
    /// Expected impact of acting on it.
    pub impact: ImpactLevel,
    /// Urgency rank; lower is more urgent.
    pub priority: u32,
    /// Estimated monthly savings, when the service provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_savings: Option<i64>,
}

/// Aggregated figures behind the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisData {
    /// Total spending over the analyzed window.
    #[serde(default)]
    pub total_spending: i64,
    /// Spending per category, in the order the service reports them.
    pub category_breakdown: IndexMap<String, i64>,
}

/// Response of `POST /analyze`, kept field-for-field.
///
/// No validation beyond structural shape: the score is not range-checked and
/// category totals are not reconciled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Narrative text of the analysis.
    pub analysis: String,
    /// Key observations, in service order.
    pub insights: Vec<String>,
    /// Advisory items, in service order.
    pub recommendations: Vec<Recommendation>,
    /// Identified risks.
    pub risk_factors: Vec<String>,
    /// Identified opportunities.
    pub opportunities: Vec<String>,
    /// Financial health score, nominally 0-100.
    pub score: u8,
    /// Aggregated figures.
    pub data: AnalysisData,
}

/// Outcome of one fetch cycle.
///
/// The fetcher always yields a renderable result; `Degraded` carries the
/// fixed fallback data together with the failure that caused it, so a
/// collaborator can surface "showing sample data" instead of hiding the
/// outage.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Data straight from the analysis service.
    Live(AnalysisResult),
    /// Fallback data served because the fetch failed.
    Degraded {
        /// The deterministic fallback result.
        result: AnalysisResult,
        /// Human-readable cause of the degradation.
        reason: String,
    },
}

impl FetchOutcome {
    /// The renderable result, live or fallback.
    pub fn result(&self) -> &AnalysisResult {
        match self {
            FetchOutcome::Live(result) => result,
            FetchOutcome::Degraded { result, .. } => result,
        }
    }

    /// True when the result is fallback data.
    pub fn is_degraded(&self) -> bool {
        matches!(self, FetchOutcome::Degraded { .. })
    }

    /// The degradation cause, if any.
    pub fn degraded_reason(&self) -> Option<&str> {
        match self {
            FetchOutcome::Live(_) => None,
            FetchOutcome::Degraded { reason, .. } => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_request_serializes_to_wire_shape() {
        let session = Session::new("tok-123", "user-7");
        let request =
            AnalysisRequest::for_session(&session, TimeRange::Quarter, AnalysisType::SavingsAdvice);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "user_id": "user-7",
                "time_range": "quarter",
                "analysis_type": "savings_advice"
            })
        );
    }

    #[test]
    fn test_result_deserializes_field_for_field() {
        let body = json!({
            "analysis": "Steady month.",
            "insights": ["Groceries dominate"],
            "recommendations": [{
                "type": "savings",
                "title": "Automate transfers",
                "description": "Move 10% on payday",
                "impact": "low",
                "priority": 3
            }],
            "risk_factors": [],
            "opportunities": ["Index funds"],
            "score": 82,
            "data": {
                "total_spending": 1500,
                "category_breakdown": {"Groceries": 900, "Rent": 600}
            }
        });

        let result: AnalysisResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.score, 82);
        assert_eq!(result.recommendations[0].kind, "savings");
        assert_eq!(result.recommendations[0].impact, ImpactLevel::Low);
        assert_eq!(result.recommendations[0].potential_savings, None);
        assert_eq!(
            result.data.category_breakdown.get("Groceries"),
            Some(&900)
        );
    }

    #[test]
    fn test_unknown_impact_deserializes_to_other() {
        let rec: Recommendation = serde_json::from_value(json!({
            "type": "misc",
            "title": "t",
            "description": "d",
            "impact": "critical",
            "priority": 1
        }))
        .unwrap();
        assert_eq!(rec.impact, ImpactLevel::Other);
    }

    #[test]
    fn test_category_breakdown_preserves_service_order() {
        let data: AnalysisData = serde_json::from_str(
            r#"{"total_spending": 6, "category_breakdown": {"z": 1, "a": 2, "m": 3}}"#,
        )
        .unwrap();
        let keys: Vec<_> = data.category_breakdown.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_time_range_round_trip() {
        for range in [TimeRange::Week, TimeRange::Month, TimeRange::Quarter, TimeRange::Year] {
            let parsed: TimeRange = range.to_string().parse().unwrap();
            assert_eq!(parsed, range);
        }
        assert!("decade".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_analysis_type_round_trip() {
        for kind in [
            AnalysisType::SpendingPattern,
            AnalysisType::SavingsAdvice,
            AnalysisType::BudgetOptimization,
        ] {
            let parsed: AnalysisType = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }
}
