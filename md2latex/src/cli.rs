// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct CliArgs {
    /// Markdown document to convert; `-` reads standard input.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// YAML file with typesetting options.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log conversion details to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}
