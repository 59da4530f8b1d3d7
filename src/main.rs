use anyhow::{Context, Result};
use todolist::config::Config;
use todolist::logger::Logger;
use todolist::ui::{self, core::AppContext};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load().context("Failed to load configuration")?;
    let logger = Logger::from_config(&config.logging)?;
    logger.log(format!(
        "Starting todolist with language {:?}, initial list '{}'",
        config.ui.language, config.ui.initial_list
    ));

    let context = AppContext::new(config, logger).context("Failed to set up the list store")?;

    // Run the TUI application
    ui::run_app(context).await?;

    Ok(())
}
