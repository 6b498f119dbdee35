use clap::Parser;
use scrollfeed::Backend;
use scrollfeed::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "scrollfeed", about = "Endless, prefetching content feed viewer")]
struct Args {
    /// Feed backend to use
    #[arg(short, long, value_enum)]
    backend: Option<Backend>,

    /// Base URL of the feed API (the client requests {base_url}/content/feed)
    #[arg(long)]
    base_url: Option<String>,

    /// Fetch more once fewer than this many unseen items remain
    #[arg(long)]
    preload_threshold: Option<usize>,

    /// Items requested per fetch (advisory)
    #[arg(long)]
    batch_size: Option<usize>,

    /// Print the first N items of the feed and exit instead of opening the viewer
    #[arg(long, value_name = "N")]
    dump: Option<usize>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to scrollfeed.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("scrollfeed.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::FeedConfig::default()
    });
    let cli = CliOverrides {
        backend: args.backend,
        base_url: args.base_url,
        preload_threshold: args.preload_threshold,
        preload_batch_size: args.batch_size,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "scrollfeed starting up with backend {:?} (threshold={}, batch={})",
        resolved.backend,
        resolved.queue.preload_threshold,
        resolved.queue.preload_batch_size
    );

    match args.dump {
        Some(count) => scrollfeed::headless::run(resolved, count).await,
        None => scrollfeed::tui::run(resolved),
    }
}
