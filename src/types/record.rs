use serde::{Deserialize, Serialize};

/// Raw sensor package: a workout tag plus positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkoutRecord {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl WorkoutRecord {
    pub fn new(workout_type: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }
}

/// The packages the tracker ships with, in emission order.
pub fn sample_records() -> Vec<WorkoutRecord> {
    vec![
        WorkoutRecord::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutRecord::new("RUN", [15000.0, 1.0, 75.0]),
        WorkoutRecord::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}
