use crate::error::DispatchError;
use crate::types::record::WorkoutRecord;
use crate::types::workout::{Running, SportsWalking, Swimming, Workout};

/// Registry entry: tag, printed label, and positional field order.
#[derive(Debug, Clone, Copy)]
pub struct WorkoutType {
    pub tag: &'static str,
    pub label: &'static str,
    pub fields: &'static [&'static str],
    build: fn(&[f64]) -> Workout,
}

impl WorkoutType {
    pub fn arity(&self) -> usize {
        self.fields.len()
    }
}

pub const WORKOUT_TYPES: &[WorkoutType] = &[
    WorkoutType {
        tag: Swimming::SHORT_NAME,
        label: Swimming::LABEL,
        fields: &[
            "action_count",
            "duration_hours",
            "weight_kg",
            "pool_length_m",
            "pool_lap_count",
        ],
        build: build_swimming,
    },
    WorkoutType {
        tag: Running::SHORT_NAME,
        label: Running::LABEL,
        fields: &["action_count", "duration_hours", "weight_kg"],
        build: build_running,
    },
    WorkoutType {
        tag: SportsWalking::SHORT_NAME,
        label: SportsWalking::LABEL,
        fields: &["action_count", "duration_hours", "weight_kg", "height_cm"],
        build: build_walking,
    },
];

// Builders are only reached after the arity check in `read_package`.
fn build_swimming(data: &[f64]) -> Workout {
    Workout::Swimming(Swimming {
        action_count: data[0],
        duration_hours: data[1],
        weight_kg: data[2],
        pool_length_m: data[3],
        pool_lap_count: data[4],
    })
}

fn build_running(data: &[f64]) -> Workout {
    Workout::Running(Running {
        action_count: data[0],
        duration_hours: data[1],
        weight_kg: data[2],
    })
}

fn build_walking(data: &[f64]) -> Workout {
    Workout::SportsWalking(SportsWalking {
        action_count: data[0],
        duration_hours: data[1],
        weight_kg: data[2],
        height_cm: data[3],
    })
}

pub fn valid_tags() -> Vec<&'static str> {
    WORKOUT_TYPES.iter().map(|t| t.tag).collect()
}

pub fn lookup(tag: &str) -> Result<&'static WorkoutType, DispatchError> {
    WORKOUT_TYPES
        .iter()
        .find(|t| t.tag == tag)
        .ok_or_else(|| DispatchError::UnknownWorkoutType {
            tag: tag.to_string(),
            valid: valid_tags(),
        })
}

/// Binds positional sensor readings to the workout kind named by `tag`.
pub fn read_package(tag: &str, data: &[f64]) -> Result<Workout, DispatchError> {
    let workout_type = lookup(tag)?;

    if data.len() != workout_type.arity() {
        return Err(DispatchError::ArityMismatch {
            tag: workout_type.tag,
            expected: workout_type.arity(),
            got: data.len(),
        });
    }

    tracing::debug!("Dispatched {} package as {}", tag, workout_type.label);

    Ok((workout_type.build)(data))
}

pub fn dispatch(record: &WorkoutRecord) -> Result<Workout, DispatchError> {
    read_package(&record.workout_type, &record.data)
}
