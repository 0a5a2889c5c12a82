//! Call site profiler demo.
//!
//! Runs a recursive and an iterative Fibonacci under instrumentation and
//! prints the per call site report.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p calltally-fibonacci
//! cargo run -p calltally-fibonacci -- -n 30 --average --report fib.txt
//! ```

mod fibonacci;

use std::path::PathBuf;

use anyhow::{bail, Context};
use calltally_debug::{show, time_it};
use calltally_profiler::{profile_scope, Profiler, ReportConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fibonacci::{fibonacci_it, fibonacci_rec};

/// Default Fibonacci argument.
const DEFAULT_N: u64 = 27;

/// Command line options.
#[derive(Debug)]
struct Args {
    n: u64,
    report_path: Option<PathBuf>,
    report: ReportConfig,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;
    let profiler = Profiler::new().with_report_config(args.report.clone());

    {
        time_it!();
        run(&profiler, args.n);
    }

    match &args.report_path {
        Some(path) => {
            profiler
                .write_report_to_file(path)
                .with_context(|| format!("writing report for n = {}", args.n))?;
            info!("Report written to {}", path.display());
        }
        None => profiler.write_report_to_stdout()?,
    }

    Ok(())
}

fn run(profiler: &Profiler, n: u64) {
    profile_scope!(profiler);
    show!(n, fibonacci_rec(profiler, n), fibonacci_it(profiler, n));
}

fn parse_args() -> anyhow::Result<Args> {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        n: DEFAULT_N,
        report_path: None,
        report: ReportConfig::default(),
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" => {
                let Some(value) = args.get(i + 1) else {
                    bail!("-n requires a value");
                };
                parsed.n = value
                    .parse()
                    .with_context(|| format!("invalid value for -n: {value}"))?;
                i += 1;
            }
            "--report" | "-r" => {
                let Some(value) = args.get(i + 1) else {
                    bail!("--report requires a path");
                };
                parsed.report_path = Some(PathBuf::from(value));
                i += 1;
            }
            "--average" => parsed.report.show_average = true,
            "--strip-prefix" => parsed.report.strip_common_file_prefix = true,
            "--help" | "-h" => {
                println!("Call site profiler demo");
                println!();
                println!("Usage: calltally-fibonacci [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -n <N>               Fibonacci argument (default: {DEFAULT_N})");
                println!("  -r, --report <PATH>  Write the report to PATH instead of stdout");
                println!("      --average        Add the average self time column");
                println!("      --strip-prefix   Drop the directory shared by all file names");
                println!("  -h, --help           Show this help message");
                std::process::exit(0);
            }
            other => bail!("unknown argument: {other}"),
        }
        i += 1;
    }

    Ok(parsed)
}
