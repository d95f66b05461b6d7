//! # creel-recidivism
//!
//! The recidivism policy engine. Given an angler's license number, a
//! violation-type code, and a lookback window, it counts prior matching
//! violations and recommends a sanction: the type's default for a first
//! offense, the next heavier sanction for a second, and the formal citation
//! ("PV") for a third or later. Pure read/decision logic: it never writes.

mod advisory;
pub mod engine;
pub mod escalation;
pub mod license;

pub use engine::RecidivismEngine;
pub use escalation::Escalation;
pub use license::numeric_form;
