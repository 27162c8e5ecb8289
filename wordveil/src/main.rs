// wordveil/src/main.rs
//! Wordveil entry point.
//!
//! Parses the CLI, assembles the keyword dictionary, builds the trie
//! engine, and dispatches to the requested command.

use anyhow::Result;
use clap::Parser;
use log::{info, LevelFilter};
use std::io::{self, BufReader};

use wordveil::cli::{Cli, Commands};
use wordveil::commands::{build_config, filter, scan};
use wordveil::logger;
use wordveil_core::TrieEngine;

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.debug {
        Some(LevelFilter::Debug)
    } else if args.quiet {
        Some(LevelFilter::Error)
    } else {
        None
    };
    logger::init_logger(level);

    info!("wordveil v{} starting.", env!("CARGO_PKG_VERSION"));

    match args.command {
        Commands::Filter(cmd) => {
            let config = build_config(
                &cmd.config,
                &cmd.wordlist,
                cmd.mask.as_deref(),
                cmd.no_default_keywords,
            )?;
            let engine = TrieEngine::new(config)?;

            if cmd.line_buffered {
                let stdin = io::stdin();
                let stdout = io::stdout();
                match cmd.input_file {
                    Some(path) => {
                        let file = std::fs::File::open(&path)?;
                        let mut reader = BufReader::new(file);
                        filter::run_filter_lines(&engine, &mut reader, &mut stdout.lock())?;
                    }
                    None => {
                        filter::run_filter_lines(&engine, &mut stdin.lock(), &mut stdout.lock())?;
                    }
                }
            } else {
                let input = filter::read_input(&cmd.input_file)?;
                filter::run_filter_opts(
                    &engine,
                    filter::FilterOptions {
                        input,
                        diff: cmd.diff,
                        output_path: cmd.output,
                        no_summary: cmd.no_summary,
                        quiet: args.quiet,
                    },
                )?;
            }
        }
        Commands::Scan(cmd) => {
            let config = build_config(&cmd.config, &cmd.wordlist, None, cmd.no_default_keywords)?;
            let engine = TrieEngine::new(config)?;
            let input = filter::read_input(&cmd.input_file)?;
            scan::run_scan_opts(
                &engine,
                scan::ScanOptions {
                    input,
                    fail_over_threshold: cmd.fail_over_threshold,
                    json_file: cmd.json_file,
                    json_stdout: cmd.json_stdout,
                    sample_matches: cmd.sample_matches,
                    quiet: args.quiet,
                },
            )?;
        }
    }

    Ok(())
}
