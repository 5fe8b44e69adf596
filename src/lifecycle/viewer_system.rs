use crate::api::{ApiClient, HttpTransport, ReqwestTransport};
use crate::config::ViewerConfig;
use crate::events::EventDispatcher;
use crate::fetcher::OrderFetcher;
use crate::render::Renderer;
use crate::view::{PageActor, ViewClient};
use tracing::{error, info};

/// The runtime orchestrator for the order viewer.
///
/// `ViewerSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the page actor
/// - **Dependency Wiring**: Handing the API client, page and renderer to the orchestrator
///
/// # Example
///
/// ```ignore
/// let system = ViewerSystem::new(&ViewerConfig::from_env()?);
///
/// system.events.dispatch(UiEvent::Input("O1".into())).await?;
/// if let Some(cycle) = system.events.dispatch(UiEvent::Click).await? {
///     let order = cycle.await??;
/// }
///
/// system.shutdown().await?;
/// ```
pub struct ViewerSystem<T: HttpTransport + 'static = ReqwestTransport> {
    /// Entry point for user events.
    pub events: EventDispatcher<T>,

    /// Direct handle to the page, for reading what it shows.
    pub view: ViewClient,

    renderer: Renderer,

    /// Task handles for running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ViewerSystem<ReqwestTransport> {
    /// Starts a viewer that talks to the configured proxy over HTTP.
    pub fn new(config: &ViewerConfig) -> Self {
        Self::with_transport(ReqwestTransport::new(), config, Renderer::local())
    }
}

impl<T: HttpTransport + 'static> ViewerSystem<T> {
    /// Starts a viewer on an arbitrary transport.
    pub fn with_transport(transport: T, config: &ViewerConfig, renderer: Renderer) -> Self {
        // A zero-sized channel panics; the field is public, so clamp here too.
        let (page_actor, view) = PageActor::new(config.channel_capacity.max(1));
        let page_handle = tokio::spawn(page_actor.run());

        let api = ApiClient::new(transport, config.base_url.as_str());
        let fetcher = OrderFetcher::new(
            api,
            view.clone(),
            renderer,
            config.loading_message.as_str(),
        );

        info!(base_url = %config.base_url, "Viewer started");

        Self {
            events: EventDispatcher::new(fetcher),
            view,
            renderer,
            handles: vec![page_handle],
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Gracefully shuts down the viewer.
    ///
    /// Dropping the clients closes the page actor's channel; fetch cycles still
    /// in flight keep their own clones and finish first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down viewer...");

        drop(self.events);
        drop(self.view);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Viewer shutdown complete.");
        Ok(())
    }
}
