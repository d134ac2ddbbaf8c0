//! Analysis fetcher: talks to the AI analysis service and guarantees
//! renderable data.
//!
//! The fetcher never surfaces an error to its caller. Any transport or
//! response-shape failure degrades to a fixed fallback result, tagged on the
//! outcome so collaborators can tell live data from sample data.

mod client;
mod fallback;
mod panel;
mod types;

pub use client::AnalysisClient;
pub use fallback::{fallback_result, FALLBACK_SCORE, FALLBACK_TOTAL_SPENDING};
pub use panel::{AnalysisPanel, PanelState};
pub use types::{
    AnalysisData, AnalysisRequest, AnalysisResult, AnalysisType, FetchOutcome, ImpactLevel,
    Recommendation, TimeRange,
};
