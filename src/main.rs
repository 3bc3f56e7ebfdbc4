use clap::Parser;
use tracing::info;

use acl2bpf::config::Config;
use acl2bpf::observability::init_tracing;
use acl2bpf::translate::{translate_file, Translator};

fn main() -> anyhow::Result<()> {
    // Parse configuration
    let config = Config::parse();

    // Initialize tracing
    init_tracing(&config.log_level, config.log_format);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        policy = ?config.malformed_policy(),
        "Starting acl2bpf"
    );

    let translator = Translator::new(config.malformed_policy());
    let translation = translate_file(&config.input, &config.output, &translator)?;

    if config.summary {
        eprintln!("{}", serde_json::to_string(&translation.report)?);
    }

    info!("Translation complete");
    Ok(())
}
