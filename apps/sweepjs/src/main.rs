use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::io::BufWriter;
use std::time::Instant;
use sweepjs_unused_imports::Config;

#[derive(Parser)]
#[command(name = "sweepjs")]
#[command(about = "A collection of tools for cleaning up JS/TS codebases", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find unused named imports from a module in JavaScript/TypeScript projects
    UnusedImports(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::UnusedImports(cfg) => {
            let num_threads = rayon::current_num_threads();
            info!(
                "Running unused imports check for '{}' (using {} threads)",
                cfg.module, num_threads
            );
            debug!("Config: root={:?}, json={}", cfg.root, cfg.json);
            let json = cfg.json;

            let result = sweepjs_unused_imports::run_unused_imports_check(cfg)?;
            debug!("Found {} files with unused imports", result.findings.len());

            info!(
                "Finished in {}ms on {} files (using {} threads)",
                start.elapsed().as_millis(),
                result.files_scanned,
                num_threads
            );

            let mut stderr = std::io::stderr();
            sweepjs_unused_imports::print_scan_errors(&mut stderr, &result.errors)?;

            if json {
                sweepjs_unused_imports::print_report_json(&mut stdout, &result.findings)?;
            } else if result.findings.is_empty() {
                sweepjs_unused_imports::print_clean_message(&mut stdout)?;
            } else {
                sweepjs_unused_imports::print_report(&mut stdout, &result.findings)?;
            }

            if !result.findings.is_empty() {
                // Non-zero exit to fail CI
                std::process::exit(1);
            }

            Ok(())
        }
    }
}
