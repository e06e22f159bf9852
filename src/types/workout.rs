use serde::{Deserialize, Serialize};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Default distance covered by one step, in meters.
pub const DEFAULT_LEN_STEP: f64 = 0.65;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    pub action_count: f64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl Running {
    pub const SHORT_NAME: &'static str = "RUN";
    pub const LABEL: &'static str = "Running";
    pub const LEN_STEP: f64 = DEFAULT_LEN_STEP;
    pub const COEFF_CALORIE_1: f64 = 18.0;
    pub const COEFF_CALORIE_2: f64 = 20.0;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    pub action_count: f64,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl SportsWalking {
    pub const SHORT_NAME: &'static str = "WLK";
    pub const LABEL: &'static str = "SportsWalking";
    pub const LEN_STEP: f64 = DEFAULT_LEN_STEP;
    pub const COEFF_CALORIE_1: f64 = 0.035;
    pub const COEFF_CALORIE_2: f64 = 0.029;
    pub const SPEED_EXPONENT: i32 = 2;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    /// Stroke count.
    pub action_count: f64,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub pool_length_m: f64,
    pub pool_lap_count: f64,
}

impl Swimming {
    pub const SHORT_NAME: &'static str = "SWM";
    pub const LABEL: &'static str = "Swimming";
    pub const LEN_STEP: f64 = 1.38;
    pub const COEFF_CALORIE_1: f64 = 1.1;
    pub const COEFF_CALORIE_2: f64 = 2.0;
}

/// One workout session, closed over the supported kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn short_name(&self) -> &'static str {
        match self {
            Workout::Running(_) => Running::SHORT_NAME,
            Workout::SportsWalking(_) => SportsWalking::SHORT_NAME,
            Workout::Swimming(_) => Swimming::SHORT_NAME,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Workout::Running(_) => Running::LABEL,
            Workout::SportsWalking(_) => SportsWalking::LABEL,
            Workout::Swimming(_) => Swimming::LABEL,
        }
    }

    pub fn duration_hours(&self) -> f64 {
        match self {
            Workout::Running(w) => w.duration_hours,
            Workout::SportsWalking(w) => w.duration_hours,
            Workout::Swimming(w) => w.duration_hours,
        }
    }
}

impl From<Running> for Workout {
    fn from(value: Running) -> Self {
        Workout::Running(value)
    }
}

impl From<SportsWalking> for Workout {
    fn from(value: SportsWalking) -> Self {
        Workout::SportsWalking(value)
    }
}

impl From<Swimming> for Workout {
    fn from(value: Swimming) -> Self {
        Workout::Swimming(value)
    }
}

/// Derived metrics for a single workout, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub training_type: String,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}
