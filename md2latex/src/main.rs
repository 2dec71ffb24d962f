// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

mod cli;

use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    if std::env::args_os().len() <= 1 {
        if let Err(err) = cli::CliArgs::command().print_help() {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let args = cli::CliArgs::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &cli::CliArgs) -> anyhow::Result<()> {
    let Some(input) = args.input.as_deref() else {
        bail!("没有输入文件");
    };

    let options = md2latex::config::load_options(args.config.as_deref())
        .context("failed to load options")?;
    let document = read_input(input)?;
    tracing::debug!(input = %input.display(), bytes = document.len(), "read document");
    let latex = md2latex_core::convert_with_options(&document, &options)
        .with_context(|| format!("failed to convert {}", input.display()))?;

    match &args.output {
        Some(path) => fs::write(path, latex)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout()
            .lock()
            .write_all(latex.as_bytes())
            .context("failed to write to stdout")?,
    }
    Ok(())
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut document = String::new();
        std::io::stdin()
            .read_to_string(&mut document)
            .context("failed to read standard input")?;
        return Ok(document);
    }
    fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
}
