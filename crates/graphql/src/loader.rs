//! Request-scoped memoization of the upstream bootstrap payload.

use std::sync::Arc;

use tokio::sync::OnceCell;

use scout_core::error::UpstreamResult;
use scout_core::models::Bootstrap;
use scout_core::ports::FantasyApi;

/// Memoizes the upstream roster fetch for one GraphQL operation.
///
/// The HTTP handler inserts a fresh loader into every request's context
/// data, so however many resolvers in the response tree need the roster
/// (query roots, `Player.team`, `Team.players`, `opp_team` lookups), the
/// upstream bootstrap endpoint is hit at most once per operation. The memo
/// dies with the response; separate operations always re-fetch.
///
/// A failed fetch is not cached: the next resolver in the same tree
/// retries, and each failure surfaces on its own field.
pub struct BootstrapLoader {
    api: Arc<dyn FantasyApi>,
    cell: OnceCell<Arc<Bootstrap>>,
}

impl BootstrapLoader {
    pub fn new(api: Arc<dyn FantasyApi>) -> Self {
        Self {
            api,
            cell: OnceCell::new(),
        }
    }

    /// The roster snapshot for this request, fetched at most once.
    pub async fn get(&self) -> UpstreamResult<Arc<Bootstrap>> {
        let boot = self
            .cell
            .get_or_try_init(|| async { self.api.bootstrap().await.map(Arc::new) })
            .await?;
        Ok(Arc::clone(boot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_api::StubApi;
    use scout_core::models::Team;

    #[tokio::test]
    async fn test_roster_fetched_once_per_loader() {
        let api = Arc::new(StubApi::with_teams(vec![Team {
            id: 1,
            name: "Arsenal".into(),
        }]));
        let loader = BootstrapLoader::new(api.clone());

        let first = loader.get().await.unwrap();
        let second = loader.get().await.unwrap();

        assert_eq!(first.teams, second.teams);
        assert_eq!(api.bootstrap_calls(), 1);
    }

    #[tokio::test]
    async fn test_separate_loaders_do_not_share() {
        let api = Arc::new(StubApi::with_teams(vec![]));

        BootstrapLoader::new(api.clone()).get().await.unwrap();
        BootstrapLoader::new(api.clone()).get().await.unwrap();

        assert_eq!(api.bootstrap_calls(), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let api = Arc::new(StubApi::failing());
        let loader = BootstrapLoader::new(api.clone());

        assert!(loader.get().await.is_err());
        assert!(loader.get().await.is_err());

        assert_eq!(api.bootstrap_calls(), 2);
    }
}
