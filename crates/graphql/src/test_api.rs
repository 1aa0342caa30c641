//! In-memory [`FantasyApi`] stub for loader and schema-execution tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use scout_core::error::{UpstreamError, UpstreamResult};
use scout_core::models::{Bootstrap, ElementSummary, Team};
use scout_core::ports::FantasyApi;

/// Serves canned payloads and counts upstream calls.
pub(crate) struct StubApi {
    bootstrap: Bootstrap,
    summary: ElementSummary,
    fail_bootstrap: bool,
    bootstrap_calls: AtomicUsize,
    summary_calls: AtomicUsize,
}

impl StubApi {
    pub fn new(bootstrap: Bootstrap, summary: ElementSummary) -> Self {
        Self {
            bootstrap,
            summary,
            fail_bootstrap: false,
            bootstrap_calls: AtomicUsize::new(0),
            summary_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_teams(teams: Vec<Team>) -> Self {
        Self::new(
            Bootstrap {
                players: vec![],
                teams,
            },
            ElementSummary::default(),
        )
    }

    /// Every bootstrap call fails with a transport error.
    pub fn failing() -> Self {
        Self {
            fail_bootstrap: true,
            ..Self::new(Bootstrap::default(), ElementSummary::default())
        }
    }

    pub fn bootstrap_calls(&self) -> usize {
        self.bootstrap_calls.load(Ordering::SeqCst)
    }

    pub fn summary_calls(&self) -> usize {
        self.summary_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FantasyApi for StubApi {
    async fn bootstrap(&self) -> UpstreamResult<Bootstrap> {
        self.bootstrap_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_bootstrap {
            return Err(UpstreamError::Transport {
                endpoint: "bootstrap-static".into(),
                message: "connection refused".into(),
            });
        }
        Ok(self.bootstrap.clone())
    }

    async fn element_summary(&self, _player_id: i32) -> UpstreamResult<ElementSummary> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.summary.clone())
    }
}
