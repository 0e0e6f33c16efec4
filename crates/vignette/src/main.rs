use clap::Parser;
use tracing::warn;
use vignette_config::Config;

mod app;
mod cli;
mod logging;

use app::App;
use cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init();

    let config = cli.apply(load_config(&cli));

    if cli.write_config {
        let path = match cli.config.clone() {
            Some(path) => path,
            None => Config::default_path()?,
        };
        config.save_to(&path)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let terminal = ratatui::init();
    let result = App::new(&config).run(terminal);
    ratatui::restore();
    result
}

/// Load the config file, falling back to defaults when it is unreadable.
fn load_config(cli: &Cli) -> Config {
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    loaded.unwrap_or_else(|err| {
        warn!(%err, "ignoring config file");
        Config::default()
    })
}
