use std::sync::Arc;

use poem::{listener::TcpListener, Server};

use itemstash_backend::api::build_app;
use itemstash_backend::app_data::AppData;
use itemstash_backend::config::{
    init_database, init_logging, migrate_database, EnvironmentProvider, LoggingConfig,
    ServerSettings, SystemEnvironment,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let env_provider: Arc<dyn EnvironmentProvider + Send + Sync> = Arc::new(SystemEnvironment);

    // Logging first so every later failure is recorded
    init_logging(&LoggingConfig::from_env_provider(env_provider.as_ref()))?;

    let settings = ServerSettings::from_env_provider(env_provider)?;
    tracing::debug!("Loaded settings: {:?}", settings);
    for (name, source) in settings.sources() {
        tracing::debug!("{} taken from {}", name, source);
    }

    let db = init_database(&settings).await?;
    migrate_database(&db).await?;
    tracing::info!("Database ready");

    let app_data = Arc::new(AppData::init(db));
    let app = build_app(app_data, &settings);

    let address = settings.server_address();
    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at http://localhost:{}/swagger", settings.server_port());
    tracing::info!("API endpoints available at http://localhost:{}/api", settings.server_port());

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}
