pub mod decision;
pub mod plate;
pub mod policy;
pub mod record;

pub use decision::{Verdict, EXTRACTION_FAILURE_REASON};
pub use plate::{DigitSequence, Plate};
pub use policy::{Policy, RuleParams};
pub use record::{Admittance, DecisionRecord};
