use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};
use welltrack::commands::Cli;
use welltrack::libs::messages::macros::is_debug_mode;

fn main() -> Result<()> {
    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("welltrack=debug"));
        fmt().with_env_filter(filter).with_target(false).init();
    }

    Cli::menu()
}
