//! Application context - composition root
//!
//! [`bootstrap`] builds the service registry, registers a provider for every
//! port, and resolves them into an [`AppContext`]. Components receive the
//! context (or the services pulled from it) explicitly; there is no ambient
//! global application object.

use appshell_domain::error::Result;
use appshell_domain::ports::{
    GlobalStore, HttpClient, SessionService, SettingsService, StorageProvider,
};
use appshell_infrastructure::config::AppConfig;
use appshell_infrastructure::ioc::{Scope, ServiceRegistry};
use appshell_infrastructure::session::SessionManager;
use appshell_infrastructure::settings::SettingsStore;
use appshell_providers::{FileGlobalStore, LocalStorageProvider, ReqwestHttpClient};
use std::sync::Arc;
use tracing::info;

/// The wired application core
///
/// Holds the configuration, the registry, and the resolved services.
/// View-models and pages pull services from here instead of constructing
/// them.
pub struct AppContext {
    config: Arc<AppConfig>,
    registry: ServiceRegistry,
    settings: Arc<dyn SettingsService>,
    session: Arc<dyn SessionService>,
    http: Arc<dyn HttpClient>,
    storage: Arc<dyn StorageProvider>,
}

impl AppContext {
    /// The configuration the context was built from
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The settings service
    pub fn settings(&self) -> Arc<dyn SettingsService> {
        self.settings.clone()
    }

    /// The session service
    pub fn session(&self) -> Arc<dyn SessionService> {
        self.session.clone()
    }

    /// The HTTP client
    pub fn http(&self) -> Arc<dyn HttpClient> {
        self.http.clone()
    }

    /// The storage provider
    pub fn storage(&self) -> Arc<dyn StorageProvider> {
        self.storage.clone()
    }

    /// The underlying registry, for registering further capabilities
    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// Load persisted settings; call once when the application starts
    pub async fn startup(&self) {
        self.settings.load().await;
        info!("application context started");
    }

    /// Persist settings and unload the store; call when the application
    /// closes
    pub async fn shutdown(&self) {
        self.settings.save().await;
        self.settings.unload(true);
        info!("application context shut down");
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("app", &self.config.app.name)
            .field("registry", &self.registry)
            .finish()
    }
}

/// Build the application context from configuration
///
/// Registers every core capability in a fresh registry and resolves them.
/// Dependencies flow through the registry: the settings provider resolves
/// the storage and global-store capabilities it needs, so swapping a
/// registration before the first resolve swaps the wiring everywhere.
pub fn bootstrap(config: AppConfig) -> Result<AppContext> {
    let config = Arc::new(config);
    let registry = ServiceRegistry::new();

    let data_dir = config.app.resolve_data_dir();
    info!(data_dir = %data_dir.display(), "bootstrapping application context");
    registry.register::<dyn StorageProvider, _>(Scope::Singleton, move |_| {
        Ok(Arc::new(LocalStorageProvider::new(data_dir.clone())) as Arc<dyn StorageProvider>)
    });

    let global_file = config.settings.global_file_name.clone();
    registry.register::<dyn GlobalStore, _>(Scope::Singleton, move |r| {
        let storage = r.resolve::<dyn StorageProvider>()?;
        Ok(Arc::new(FileGlobalStore::new(storage, global_file.clone())) as Arc<dyn GlobalStore>)
    });

    let settings_config = config.settings.clone();
    registry.register::<dyn SettingsService, _>(Scope::Singleton, move |r| {
        let storage = r.resolve::<dyn StorageProvider>()?;
        let global = r.resolve::<dyn GlobalStore>()?;
        Ok(SettingsStore::with_options(
            storage,
            global,
            settings_config.file_name.clone(),
            settings_config.autosave_delay(),
        ) as Arc<dyn SettingsService>)
    });

    registry.register::<dyn SessionService, _>(Scope::Singleton, |_| {
        Ok(Arc::new(SessionManager::new()) as Arc<dyn SessionService>)
    });

    let http_config = config.http.clone();
    registry.register::<dyn HttpClient, _>(Scope::Singleton, move |_| {
        Ok(Arc::new(ReqwestHttpClient::new(http_config.client_config())?) as Arc<dyn HttpClient>)
    });

    let settings = registry.resolve::<dyn SettingsService>()?;
    let session = registry.resolve::<dyn SessionService>()?;
    let http = registry.resolve::<dyn HttpClient>()?;
    let storage = registry.resolve::<dyn StorageProvider>()?;

    Ok(AppContext {
        config,
        registry,
        settings,
        session,
        http,
        storage,
    })
}
