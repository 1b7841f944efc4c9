pub mod alcohol;
pub mod batch;
pub mod rates;
pub mod vehicle;

use std::sync::Arc;

use customs_core::{CustomsEngine, RateSchedule};

use crate::input;

/// Build an engine against either the default schedule or one provisioned
/// from a JSON file.
pub fn load_engine(
    schedule_path: &Option<String>,
) -> Result<CustomsEngine, Box<dyn std::error::Error>> {
    let schedule: RateSchedule = match schedule_path {
        Some(path) => input::read_json(path)?,
        None => RateSchedule::default(),
    };
    Ok(CustomsEngine::new(Arc::new(schedule)))
}
