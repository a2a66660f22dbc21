use clap::Parser;
use ratelist::core::config::{self, CliOverrides};
use ratelist::rates::{PageSize, SortOrder};
use ratelist::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "ratelist", about = "Currency exchange rates in the terminal")]
struct Args {
    /// Rates endpoint (JSON with a `rates` object)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Currencies per page: 10, 20, 50 or 100
    #[arg(short, long)]
    page_size: Option<PageSize>,

    /// Order of the list
    #[arg(short, long, value_enum)]
    sort: Option<SortOrder>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to ratelist.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("ratelist.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().map_err(std::io::Error::other)?;
    let cli = CliOverrides {
        endpoint: args.endpoint,
        page_size: args.page_size,
        sort: args.sort,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Ratelist starting up: endpoint={}, page_size={}, sort={:?}",
        resolved.endpoint,
        resolved.page_size,
        resolved.sort
    );

    tui::run(resolved)
}
