use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::client::AnalysisClient;
use super::types::{AnalysisRequest, AnalysisType, FetchOutcome, TimeRange};
use crate::session::Session;

/// View state of the analysis panel.
///
/// Always a whole outcome or a loading marker, never a mix of an old result
/// and a new partial one.
#[derive(Debug, Clone)]
pub enum PanelState {
    /// Nothing fetched yet.
    Idle,
    /// A fetch is in flight.
    Loading {
        /// Sequence number of the in-flight fetch.
        seq: u64,
        /// The previous outcome, kept whole so the view can keep showing it.
        previous: Option<FetchOutcome>,
    },
    /// The latest fetch completed.
    Ready {
        /// Sequence number of the completed fetch.
        seq: u64,
        /// Its outcome.
        outcome: FetchOutcome,
    },
}

/// Drives analysis fetches and keeps exactly one visible result.
///
/// Every fetch is issued a monotonically increasing sequence number. A
/// completion only installs its outcome while it is still the latest issued,
/// so a slow early request cannot overwrite the result of a later one.
pub struct AnalysisPanel {
    client: AnalysisClient,
    seq: AtomicU64,
    state: Mutex<PanelState>,
}

impl AnalysisPanel {
    /// Create a panel over the given client.
    pub fn new(client: AnalysisClient) -> Self {
        Self {
            client,
            seq: AtomicU64::new(0),
            state: Mutex::new(PanelState::Idle),
        }
    }

    /// Snapshot of the current panel state.
    pub fn state(&self) -> PanelState {
        self.lock().clone()
    }

    /// True while the latest issued fetch has not completed.
    pub fn is_loading(&self) -> bool {
        matches!(*self.lock(), PanelState::Loading { .. })
    }

    /// Issue a sequence number and flip the panel to `Loading`.
    ///
    /// The previous outcome, if any, stays available whole for display.
    pub fn begin(&self) -> u64 {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        let mut state = self.lock();
        let previous = match &*state {
            PanelState::Idle => None,
            PanelState::Loading { previous, .. } => previous.clone(),
            PanelState::Ready { outcome, .. } => Some(outcome.clone()),
        };
        *state = PanelState::Loading { seq, previous };
        seq
    }

    /// Install a completed outcome unless a later fetch has been issued.
    pub fn complete(&self, seq: u64, outcome: FetchOutcome) {
        let latest = self.seq.load(Ordering::SeqCst);
        if seq != latest {
            debug!(seq, latest, "discarding stale analysis response");
            return;
        }
        *self.lock() = PanelState::Ready { seq, outcome };
    }

    /// Run one full fetch cycle for the given session and parameters.
    ///
    /// Call again whenever the time range or analysis type changes, or on an
    /// explicit retry; the newest call wins.
    pub async fn refresh(
        &self,
        session: &Session,
        time_range: TimeRange,
        analysis_type: AnalysisType,
    ) -> FetchOutcome {
        let seq = self.begin();
        let request = AnalysisRequest::for_session(session, time_range, analysis_type);
        let outcome = self.client.fetch(session, &request).await;
        self.complete(seq, outcome.clone());
        outcome
    }

    fn lock(&self) -> MutexGuard<'_, PanelState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
