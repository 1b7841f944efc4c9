pub mod breakdown;
pub mod declaration;
pub mod engine;
pub mod error;
pub mod schedule;
pub mod types;
pub mod units;

pub use breakdown::{BatchSummary, ConcessionOutcome, DutyBreakdown};
pub use declaration::{AlcoholType, CommodityCategory, Declaration, VehicleType};
pub use engine::CustomsEngine;
pub use error::CustomsError;
pub use schedule::RateSchedule;
pub use types::*;

/// Standard result type for all customs-engine operations
pub type CustomsResult<T> = Result<T, CustomsError>;
