use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::translate::MalformedPolicy;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Translator configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "acl2bpf")]
#[command(about = "Translate a permit-rule ACL file into a composed packet filter expression")]
#[command(version)]
pub struct Config {
    /// Path to the ACL rule file
    pub input: PathBuf,

    /// Path the composed filter expression is written to
    pub output: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, env = "ACL2BPF_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Report every malformed rule line instead of stopping at the first
    #[arg(long, env = "ACL2BPF_COLLECT_ERRORS")]
    pub collect_errors: bool,

    /// Print translation counters as JSON on stderr
    #[arg(long)]
    pub summary: bool,
}

impl Config {
    /// How malformed permit lines are handled.
    pub fn malformed_policy(&self) -> MalformedPolicy {
        if self.collect_errors {
            MalformedPolicy::Collect
        } else {
            MalformedPolicy::FailFast
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from("rules.acl"),
            output: PathBuf::from("filter.bpf"),
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            collect_errors: false,
            summary: false,
        }
    }
}
