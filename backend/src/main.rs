use log::error;
use summarizer_backend::config::{create_cors, init_logger, load_environment, AppConfig};
use summarizer_backend::{build_rocket, create_app_state};

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    load_environment();
    init_logger();

    let config = AppConfig::from_env().inspect_err(|e| error!("{e}"))?;
    let cors = create_cors(config.allowed_origins.as_deref())?;

    build_rocket(create_app_state(&config))
        .attach(cors)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket failed: {e}"))?;

    Ok(())
}
