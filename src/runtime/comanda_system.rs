use crate::counter::KeyValueStore;
use crate::desk::{ComandaDesk, DeskClient};
use crate::runtime::ComandaConfig;
use tracing::{error, info};

/// Request buffer for the desk. A counter only ever sees a handful of
/// concurrent form sessions.
const DESK_BUFFER: usize = 32;

/// Owns the running desk actor.
///
/// # Example
///
/// ```ignore
/// let system = ComandaSystem::new(ComandaConfig::from_env()?, JsonFileStore::open("counters.json"));
///
/// let record = system.desk_client.submit(&draft).await?;
///
/// let store = system.shutdown().await?;
/// ```
pub struct ComandaSystem<S: KeyValueStore> {
    /// Client for interacting with the desk
    pub desk_client: DeskClient,

    /// Task handle of the desk; resolves to the store on shutdown
    handle: tokio::task::JoinHandle<S>,
}

impl<S: KeyValueStore + Send + 'static> ComandaSystem<S> {
    /// Spawns the desk over `store`. Must be called inside a Tokio runtime.
    pub fn new(config: ComandaConfig, store: S) -> Self {
        let (desk, desk_client) = ComandaDesk::new(DESK_BUFFER, store, config);
        Self::start(desk, desk_client)
    }

    /// Spawns an already configured desk (e.g. one with a fixed clock).
    pub fn start(desk: ComandaDesk<S>, desk_client: DeskClient) -> Self {
        let handle = tokio::spawn(desk.run());
        Self { desk_client, handle }
    }

    /// Gracefully shuts down the desk.
    ///
    /// Dropping the client closes the channel; the desk drains what is
    /// queued, exits its loop and hands back the store. Clones of the
    /// client held elsewhere keep the desk alive until they are dropped too.
    ///
    /// # Returns
    ///
    /// - `Ok(store)` if the desk shut down cleanly
    /// - `Err(String)` if the desk task failed or panicked
    pub async fn shutdown(self) -> Result<S, String> {
        info!("Shutting down desk...");
        drop(self.desk_client);

        match self.handle.await {
            Ok(store) => {
                info!("Desk shutdown complete.");
                Ok(store)
            }
            Err(e) => {
                error!("Desk task failed: {:?}", e);
                Err(format!("Desk task failed: {:?}", e))
            }
        }
    }
}
