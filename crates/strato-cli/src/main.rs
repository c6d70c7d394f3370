mod commands;

use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use strato_core::{
    AppServiceBuilder, BuilderRegistry, CacheDbBuilder, Engine, JournalSubscriber,
    ResourceSubscriber, StorageAccountBuilder,
};
use strato_journal::EventJournal;

#[derive(Debug, Parser)]
#[command(
    name = "strato",
    version,
    about = "In-process lifecycle manager for cloud-like resources"
)]
struct Cli {
    /// Directory for the per-resource-type event log files.
    #[arg(long, default_value = "logs")]
    journal: String,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false)]
    trace: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("STRATO_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Wire journal, subscriber, registry, and engine, then hand control to the
/// interactive menu. All dependencies are constructed once, here.
fn run(cli: &Cli) -> Result<(), String> {
    let journal = Arc::new(EventJournal::new(&cli.journal).map_err(|e| e.to_string())?);
    let subscriber: Arc<dyn ResourceSubscriber> =
        Arc::new(JournalSubscriber::new(Arc::clone(&journal)));

    let mut registry = BuilderRegistry::new();
    registry.register("AppService", Box::new(AppServiceBuilder));
    registry.register("StorageAccount", Box::new(StorageAccountBuilder));
    registry.register("CacheDB", Box::new(CacheDbBuilder));

    let mut engine = Engine::new(registry, subscriber);
    commands::menu_loop(&mut engine, &journal)
}
