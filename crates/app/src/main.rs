use engine::Engine;
use url::Url;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "expense_tracker={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let engine = match build_engine(&settings.data).await {
        Ok(engine) => engine,
        Err(err) => {
            tracing::error!("failed to build engine from seed data: {err}");
            return Err(err);
        }
    };

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let base_url = match settings.server.base_url {
        Some(url) => Url::parse(&url)?,
        None => Url::parse(&format!("http://{addr}"))?,
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return Err(err.into());
        }
    };
    tracing::info!("Pagination links use base url {base_url}");
    server::run_with_listener(engine, base_url, listener).await?;

    Ok(())
}

async fn build_engine(
    data: &settings::Data,
) -> Result<Engine, Box<dyn std::error::Error + Send + Sync>> {
    let builder = match &data.seed {
        Some(path) => {
            tracing::info!("Loading expense groups from {path}...");
            let json = tokio::fs::read_to_string(path).await?;
            Engine::builder().seed_json(&json)?
        }
        None => {
            tracing::warn!("No seed file configured, serving an empty store");
            Engine::builder()
        }
    };
    Ok(builder.build()?)
}
