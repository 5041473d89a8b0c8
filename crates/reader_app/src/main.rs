mod app;
mod config;
mod effects;
mod input;
mod install;
mod logging;
mod render;

use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = config::load(config_path.as_deref())?;
    logging::initialize(config.log_destination);
    app::run(config)
}
