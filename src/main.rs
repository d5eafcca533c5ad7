use biscotti_pos::config::{self, Settings};
use biscotti_pos::core::Cafe;
use biscotti_pos::errors::Result;
use biscotti_pos::shell;
use biscotti_pos::store::Store;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Non-fatal, env vars can be set externally

    // 3. Resolve file locations and load the menu card
    let settings = Settings::from_env();
    let menu = config::menu::load_menu(&settings.menu_file)
        .inspect_err(|e| error!("Failed to load menu card: {e}"))?;
    info!(items = menu.len(), "menu card loaded");

    // 4. Load the order registry from disk (missing file = empty registry)
    let store = Store::new(settings.data_file);
    let mut cafe = Cafe::load(menu, store)
        .inspect_err(|e| error!("Failed to load order registry: {e}"))?;

    // 5. Run the operator shell
    shell::run(&mut cafe)?;

    Ok(())
}
