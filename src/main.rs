//! Minerva CLI entry point

use std::process;
use std::time::{Duration, Instant};

use clap::{CommandFactory, Parser};
use log::info;
use minerva::{convert, input, CaptureConfig, Error, OutputSink};

/// Convert HTML to PNG via inline markup or a local / internal URI
#[derive(Parser, Debug)]
#[command(name = "minerva")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Inline HTML (starting with <div), a chrome:// URI, or a local file path
    input: Option<String>,

    /// Output file; defaults to a digest-derived name in the working directory
    output: Option<String>,

    /// Seconds before the conversion times out
    #[arg(short = 'T', long, default_value_t = 120)]
    timeout: u64,

    /// Write the PNG to stdout instead of a file
    #[arg(short = 'S', long)]
    stdout: bool,

    /// Debug mode; disables the conversion timeout
    #[arg(short = 'D', long)]
    debug: bool,

    /// Disable the browser cache
    #[arg(long)]
    no_cache: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let filter = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let Some(raw_input) = args.input.filter(|s| !s.is_empty()) else {
        // Mirror plain invocation: show usage before complaining
        if std::env::args_os().len() <= 1 {
            let _ = Args::command().print_help();
            println!();
        }
        eprintln!("No html given.");
        process::exit(1);
    };

    let target = match input::resolve(&raw_input) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    let sink = OutputSink::select(args.output.as_deref(), args.stdout, target.as_str());

    let config = CaptureConfig {
        disable_cache: args.no_cache,
        ..CaptureConfig::default()
    };

    let started = Instant::now();
    let conversion = convert::render_png(target.clone(), config);

    let result = if args.debug {
        conversion.await
    } else {
        match tokio::time::timeout(Duration::from_secs(args.timeout), conversion).await {
            Ok(result) => result,
            Err(_) => {
                // Hard exit; the in-flight browser operation is not cancelled
                eprintln!("{}", Error::Timeout(args.timeout));
                process::exit(2);
            }
        }
    };

    let bytes = match result {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    if let Err(e) = sink.write(&bytes) {
        eprintln!("{}", e);
        process::exit(2);
    }

    if let OutputSink::File(path) = &sink {
        info!(
            "Converted '{}' to PNG: '{}' in {:.2?}",
            target.as_str(),
            path.display(),
            started.elapsed()
        );
    }

    process::exit(0);
}
