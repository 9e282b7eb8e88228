use clap::Parser;
use jotter::core::config::{self, CliOverrides, JotterConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jotter", version, about = "Color-tagged notes in your terminal")]
struct Args {
    /// Storage file to read and write notes from
    #[arg(short, long)]
    store: Option<PathBuf>,

    /// Storage slot holding the note collection
    #[arg(short, long)]
    key: Option<String>,

    /// Keep notes in memory only for this run
    #[arg(long, conflicts_with = "store")]
    ephemeral: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger: ~/.jotter/jotter.log, or ./jotter.log without a home dir
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let log_path = match config::data_dir() {
        Some(dir) if fs::create_dir_all(&dir).is_ok() => dir.join("jotter.log"),
        _ => PathBuf::from("jotter.log"),
    };
    if let Ok(log_file) = File::create(&log_path) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}", e);
        eprintln!("jotter: {e}; using defaults");
        JotterConfig::default()
    });
    let cli = CliOverrides {
        store: args.store,
        key: args.key,
        ephemeral: args.ephemeral,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Jotter starting up (store: {:?}, key: {})",
        resolved.store_path,
        resolved.storage_key
    );

    jotter::tui::run(resolved)
}
