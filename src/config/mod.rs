use std::path::PathBuf;

use clap::Parser;

/// Admission engine configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "plategate")]
#[command(about = "Parking-lot admission engine with an append-only decision journal")]
pub struct Config {
    /// Plate texts to evaluate, as handed over by the extraction service.
    /// Pass an empty string for a plate that could not be extracted.
    #[arg(value_name = "PLATE")]
    pub plates: Vec<String>,

    /// Path to policy YAML file (built-in defaults apply when absent)
    #[arg(long, default_value = "policy.yaml", env = "PLATEGATE_POLICY_PATH")]
    pub policy_path: PathBuf,

    /// Path to the decision journal file
    #[arg(long, default_value = "parking_log.jsonl", env = "PLATEGATE_JOURNAL_PATH")]
    pub journal_path: PathBuf,

    /// Print every stored decision record and exit
    #[arg(long)]
    pub dump: bool,

    /// Echo each verdict to stdout
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            plates: Vec::new(),
            policy_path: PathBuf::from("policy.yaml"),
            journal_path: PathBuf::from("parking_log.jsonl"),
            dump: false,
            verbose: false,
            log_level: "info".to_string(),
        }
    }
}
