use clap::Parser;
use tracing::info;

use plategate::audit::DecisionLogger;
use plategate::config::Config;
use plategate::domain::Plate;
use plategate::observability::init_tracing;
use plategate::policy::PolicyLoader;
use plategate::storage::JournalStore;

fn main() -> anyhow::Result<()> {
    // Parse configuration
    let config = Config::parse();

    // Initialize tracing
    init_tracing(&config.log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting plategate admission engine"
    );

    // Load policy and compile the rule chain
    let loader = PolicyLoader::new(config.policy_path.to_string_lossy());
    let (policy, ruleset) = loader.load()?;
    info!(policy_version = %policy.version, "policy loaded");

    // Open the decision journal
    let store = JournalStore::open(&config.journal_path)?;
    let mut logger = DecisionLogger::new(store);

    if config.dump {
        for record in logger.dump()? {
            println!("{}", serde_json::to_string(&record)?);
        }
        return Ok(());
    }

    for raw in &config.plates {
        let plate = Plate::new(raw.as_str());

        // An empty plate means the extraction service came up empty
        let record = if plate.is_empty() {
            logger.record_extraction_failure(&plate)?
        } else {
            let verdict = ruleset.evaluate(&plate);
            logger.record_verdict(&plate, &verdict)?
        };

        if config.verbose {
            match &record.reason {
                None => println!("Access granted"),
                Some(reason) => println!("Access denied, {reason}"),
            }
        }
    }

    Ok(())
}
