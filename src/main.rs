use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use wifi_portal::config::{self, DEFAULT_CONFIG_FILE};
use wifi_portal::http::screens;
use wifi_portal::{logging, render_page, runtime, Result, ThemePreset};

/// Serve the Wi-Fi setup portal.
#[derive(Debug, Parser)]
#[command(name = "wifi-portal", version)]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Listen address, overrides `server.addr`
    #[arg(long)]
    addr: Option<String>,

    /// Color theme, overrides the configured colors
    #[arg(long, value_enum)]
    preset: Option<ThemePreset>,

    /// Refuse to start when a theme field is malformed
    #[arg(long)]
    strict: bool,

    /// Print the setup page to stdout and exit
    #[arg(long)]
    dump: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = config::load_config(&cli.config)?;
    if let Some(addr) = cli.addr {
        config.server.addr = addr;
    }
    if let Some(preset) = cli.preset {
        config.theme = config.theme.with_preset(preset);
    }
    if cli.strict {
        config.theme.validate()?;
    }

    if cli.dump {
        let fragment = screens::setup_form(None, None);
        println!("{}", render_page("Setup", &fragment, &config.theme));
        return Ok(());
    }

    runtime::run(config)
}
