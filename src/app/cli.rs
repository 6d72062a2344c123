use clap::Parser;
use std::path::PathBuf;

use crate::ranker::DEFAULT_TOP;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Prints the best-scoring runs from an experiment results log.", long_about = None)]
pub struct RankCli {
    /// Results log to rank
    #[clap(default_value = "out")]
    pub input: PathBuf,

    /// Number of entries to print
    #[clap(short = 'n', long = "top", default_value_t = DEFAULT_TOP)]
    pub top: usize,

    /// Append verbose progress messages to this file
    #[clap(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Renders a '^'-placeholder template into an output file.", long_about = None)]
pub struct TemplateCli {
    /// Template to render
    pub template_file: PathBuf,

    /// File to create or overwrite with the rendered template
    pub output_file: PathBuf,

    /// Placeholder definitions, each `<char>:<name>:<value>`; pass them after
    /// `--` when a key is `-`
    pub mappings: Vec<String>,

    /// Append verbose progress messages to this file
    #[clap(long)]
    pub log_file: Option<PathBuf>,
}
