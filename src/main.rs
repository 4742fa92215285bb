mod core;
mod tests;

use clap::{Parser, command, arg};

use core::counter::command::Command;
use core::provider::SimulatedApi;
use core::session::CounterSession;

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_bunyan_formatter::{JsonStorageLayer, BunyanFormattingLayer};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long)]
    predefined_value: Option<i64>,
    #[arg(short, long, default_value_t = 150)]
    latency_ms: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_command_line_args();

    let _guard = init_tracing();

    let session = create_session(&args);

    run_command_loop(session).await?;

    Ok(())
}

fn parse_command_line_args() -> Args {
    Args::parse()
}

fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    let file_appender = tracing_appender::rolling::daily("./logs", "trace.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name, non_blocking);

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer) // Remove this line if you don't need file output
        .try_init() {
            eprintln!("Error initializing tracing: {}", e);
            panic!("Failed to initialise tracing")
    }

    guard
}

fn create_session(args: &Args) -> CounterSession {
    let provider = Arc::new(SimulatedApi::new(Duration::from_millis(args.latency_ms)));
    CounterSession::new(provider, args.predefined_value)
}

async fn run_command_loop(mut session: CounterSession) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = session.start().await {
        eprintln!("Could not fetch the initial count: {}", e);
    }
    print_counters(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match Command::parse(line) {
            Ok(Command::Quit) => break,
            Ok(cmd) => apply_command(&mut session, cmd).await,
            Err(e) => eprintln!("{} (commands: add | inc <id> | dec <id> | rand <id> | list | quit)", e),
        }
    }

    Ok(())
}

async fn apply_command(session: &mut CounterSession, cmd: Command) {
    tracing::debug!("Dispatching command: {:?}", cmd);

    match cmd {
        Command::Add => match session.add_counter().await {
            Ok(id) => println!("Added counter {}", id),
            Err(e) => eprintln!("Could not add a counter: {}", e),
        },
        Command::Increment(id) => session.increment(id),
        Command::Decrement(id) => session.decrement(id),
        Command::Randomize(id) => session.randomize(id),
        Command::List | Command::Quit => {}
    }

    print_counters(session);
}

fn print_counters(session: &CounterSession) {
    if session.counters().is_empty() {
        println!("There are no available counters");
        return;
    }

    match serde_json::to_string_pretty(session.counters()) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Could not render counters: {}", e),
    }
}
