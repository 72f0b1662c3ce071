use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use statbar::Result;
use statbar::config;
use statbar::fetch::HttpSource;
use statbar::menu;
use statbar::mute::MuteSet;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the config file (defaults to ~/.config/statbar/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Config profile table to read (defaults to the invoked binary name)
    #[arg(long)]
    profile: Option<String>,
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the dropdown menu to stdout (the default)
    Menu,
    /// Mute a widget by id and exit without rendering
    Mute {
        /// Item identifier as shown by the service
        id: String,
    },
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    match args.cmd {
        Some(Command::Mute { id }) => cmd_mute(&id),
        Some(Command::Menu) | None => cmd_menu(args.config, args.profile),
    }
}

fn cmd_menu(config_path: Option<PathBuf>, profile: Option<String>) -> Result<()> {
    let path = match config_path {
        Some(p) => p,
        None => config::default_path()?,
    };
    let profile = profile.unwrap_or_else(invoked_name);
    let cfg = config::load(&path, &profile)?;

    // A corrupt mute list must not blank the menu; degrade to empty.
    let mute_file = config::mute_path()?;
    let muted = MuteSet::load(&mute_file).unwrap_or_else(|e| {
        debug!("ignoring mute list: {e}");
        MuteSet::empty(&mute_file)
    });

    let exe = std::env::current_exe()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "statbar".to_string());
    let source = HttpSource::new(&cfg.api, &cfg.token)?;

    for line in menu::assemble(&cfg, &muted, chrono::Utc::now(), &exe, &source) {
        println!("{line}");
    }
    Ok(())
}

fn cmd_mute(id: &str) -> Result<()> {
    let mut muted = MuteSet::load(&config::mute_path()?)?;
    muted.mute(id)
}

/// Basename of argv[0]. Symlinking the binary under another name selects
/// another profile table, so one config file serves several menu entries.
fn invoked_name() -> String {
    std::env::args_os()
        .next()
        .map(PathBuf::from)
        .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "statbar".to_string())
}

/// Debug logging goes to stderr only when running outside the menu-bar
/// host, mirroring how the host environment markers work.
fn init_logging() {
    let under_host = std::env::vars_os().any(|(k, _)| {
        let k = k.to_string_lossy();
        k.starts_with("BitBar") || k.starts_with("SWIFTBAR")
    });
    if under_host {
        return;
    }
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("statbar=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
