pub mod audit;
pub mod config;
pub mod domain;
pub mod observability;
pub mod policy;
pub mod rules;
pub mod storage;

pub use audit::DecisionLogger;
pub use config::Config;
pub use domain::{DecisionRecord, Plate, Verdict};
pub use rules::{PlateRule, RuleSet};
