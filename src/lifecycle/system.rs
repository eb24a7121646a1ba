use crate::clients::{AccountClient, CatalogClient, OrderStoreClient};
use crate::config::SystemConfig;
use crate::contracts::{AccountContract, CatalogContract, OrderContract, OrderStore};
use crate::gateway::Gateway;
use crate::orchestrator::OrderService;
use std::sync::Arc;
use tracing::{error, info};

/// The running system: three store actors, the Order Orchestrator and the Gateway.
///
/// `StorefrontSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the store actors
/// - **Dependency Wiring**: building the orchestrator and gateway from the store clients
///
/// Store clients are constructed once here and shared by everything that needs them.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> Result<(), String> {
/// use storefront::config::SystemConfig;
/// use storefront::gateway::AccountInput;
/// use storefront::lifecycle::StorefrontSystem;
///
/// let system = StorefrontSystem::start(&SystemConfig::default());
/// let account = system
///     .gateway
///     .create_account(AccountInput { name: "Ada".into() })
///     .await
///     .map_err(|e| e.to_string())?;
/// println!("created {}", account.id);
/// system.shutdown().await
/// # }
/// ```
pub struct StorefrontSystem {
    /// The client-facing query/mutation surface.
    pub gateway: Gateway,

    /// The orchestrator, also reachable through the gateway.
    pub orders: Arc<OrderService>,

    accounts: AccountClient,
    catalog: CatalogClient,
    order_store: OrderStoreClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Spawns the store actors and wires the orchestrator and gateway over them.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn start(config: &SystemConfig) -> Self {
        let buffer = config.stores.channel_buffer.max(1);
        let cap = config.paging.cap;

        // 1. Create store actors
        let (account_actor, accounts) = crate::account_store::new(buffer, cap);
        let (catalog_actor, catalog) = crate::catalog_store::new(buffer, cap);
        let (order_actor, order_store) = crate::order_store::new(buffer);

        // 2. Start them
        let handles = vec![
            tokio::spawn(account_actor.run()),
            tokio::spawn(catalog_actor.run()),
            tokio::spawn(order_actor.run()),
        ];

        // 3. Inject the clients
        let account_contract: Arc<dyn AccountContract> = Arc::new(accounts.clone());
        let catalog_contract: Arc<dyn CatalogContract> = Arc::new(catalog.clone());
        let store_contract: Arc<dyn OrderStore> = Arc::new(order_store.clone());

        let orders = Arc::new(OrderService::new(
            account_contract.clone(),
            catalog_contract.clone(),
            store_contract,
        ));
        let order_contract: Arc<dyn OrderContract> = orders.clone();
        let gateway = Gateway::new(
            account_contract,
            catalog_contract,
            order_contract,
            config.gateway.request_timeout(),
        );

        info!(
            request_timeout_ms = config.gateway.request_timeout_ms,
            page_cap = cap,
            channel_buffer = buffer,
            "System started"
        );

        Self {
            gateway,
            orders,
            accounts,
            catalog,
            order_store,
            handles,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping every client closes the store channels; each actor then drains and
    /// exits its loop. Clones of the gateway held elsewhere keep the stores alive, so
    /// drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        let Self {
            gateway,
            orders,
            accounts,
            catalog,
            order_store,
            handles,
        } = self;
        drop(gateway);
        drop(orders);
        drop(accounts);
        drop(catalog);
        drop(order_store);

        for handle in handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
