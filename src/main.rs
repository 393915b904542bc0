use clap::Parser;
use folio::core::config::{self, CliOverrides};
use folio::core::route::View;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "folio", about = "Terminal catalog browser for a book-review service")]
struct Args {
    /// Root URL of the review API (the catalog is read from `<URL>/books`)
    #[arg(short, long)]
    base_url: Option<String>,

    /// View to open on startup
    #[arg(short, long, value_enum)]
    view: Option<View>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to folio.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("folio.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Ignoring config file: {}", e);
            eprintln!("folio: {e}; using defaults");
            config::FolioConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url.as_deref(),
            view: args.view,
        },
    );

    log::info!(
        "Folio starting up against {} ({:?} view, {} per page)",
        resolved.base_url,
        resolved.start_view,
        resolved.page_size
    );

    folio::tui::run(resolved)
}
