//! `run`: the polling loop.

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Run the scheduler until Ctrl-C.
#[cfg(feature = "telegram")]
pub async fn execute(config: Config) -> Result<()> {
    use tokio::signal;
    use tracing::info;

    use crate::infrastructure::bootstrap::{build_scheduler, build_sink};

    let scheduler = build_scheduler(&config, build_sink(&config))?;

    info!(target_chat = %config.target, "dolar-bot starting");
    tokio::select! {
        () = scheduler.run() => {}
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }
    info!("dolar-bot stopped");
    Ok(())
}

#[cfg(not(feature = "telegram"))]
pub async fn execute(_config: Config) -> Result<()> {
    use crate::error::ConfigError;

    Err(ConfigError::InvalidValue {
        field: "telegram_token",
        reason: "built without the telegram feature".to_string(),
    }
    .into())
}
