//! Application context wiring the console services together.

use std::sync::Arc;

use tracing::info;

use dataall_core::config::AppConfig;
use dataall_core::result::AppResult;
use dataall_core::traits::{KeyValueStore, Notifier};
use dataall_core::types::ShareUri;
use dataall_graphql::transport::{GraphqlTransport, HttpTransport};
use dataall_storage::StoreManager;
use dataall_storage::memory::MemoryStore;

use crate::client::ApiClient;
use crate::replay::{ReplayService, RequestInfoStore};
use crate::session::{SessionService, SessionState};
use crate::share::{ShareController, ShareService};

/// Every service of one console instance, sharing one transport, one pair
/// of local stores and one notifier.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Where user-visible events go.
    pub notifier: Arc<dyn Notifier>,
    /// GraphQL transport.
    pub transport: Arc<dyn GraphqlTransport>,
    /// Store that survives restarts.
    pub durable_store: Arc<dyn KeyValueStore>,
    /// Store cleared with the session.
    pub session_store: Arc<dyn KeyValueStore>,
    /// Re-authentication replay manager.
    pub replay: Arc<ReplayService>,
    /// Session lifecycle.
    pub session: Arc<SessionService>,
    /// Re-auth-aware client.
    pub client: Arc<ApiClient>,
    /// Share listings.
    pub shares: ShareService,
}

impl AppContext {
    /// Wire services over explicit collaborators.
    pub fn new(
        config: AppConfig,
        transport: Arc<dyn GraphqlTransport>,
        durable_store: Arc<dyn KeyValueStore>,
        session_store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let config = Arc::new(config);

        let slot = RequestInfoStore::new(
            Arc::clone(&durable_store),
            config.storage.request_info_key.clone(),
        );
        let replay = Arc::new(ReplayService::new(
            slot,
            Arc::clone(&transport),
            config.reauth.ttl(),
        ));

        let session = Arc::new(SessionService::new(
            Arc::new(SessionState::new()),
            Arc::clone(&session_store),
            config.storage.window_location_key.clone(),
            Arc::clone(&transport),
            Arc::clone(&replay),
            Arc::clone(&notifier),
            config.auth.platform(),
        ));

        let client = Arc::new(ApiClient::new(
            Arc::clone(&transport),
            Arc::clone(&replay),
            Arc::clone(&session),
        ));
        let shares = ShareService::new(Arc::clone(&client));

        Self {
            config,
            notifier,
            transport,
            durable_store,
            session_store,
            replay,
            session,
            client,
            shares,
        }
    }

    /// Wire services from configuration: HTTP transport, the configured
    /// durable store and an in-memory session store.
    pub async fn from_config(config: AppConfig, notifier: Arc<dyn Notifier>) -> AppResult<Self> {
        let transport: Arc<dyn GraphqlTransport> = Arc::new(HttpTransport::new(&config.api)?);
        let durable = StoreManager::new(&config.storage).await?;
        info!(
            endpoint = %config.api.endpoint,
            store = %durable.provider_type(),
            platform = %config.auth.platform(),
            "Console context initialized"
        );

        Ok(Self::new(
            config,
            transport,
            durable.store(),
            Arc::new(MemoryStore::new()),
            notifier,
        ))
    }

    /// A controller bound to one share request.
    pub fn share_controller(&self, share_uri: ShareUri) -> ShareController {
        ShareController::new(share_uri, Arc::clone(&self.client))
    }
}
