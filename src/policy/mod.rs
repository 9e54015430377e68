pub mod loader;

pub use loader::{load_policy, load_policy_or_default, PolicyError, PolicyLoader};
