use crate::error::ComputeError;
use crate::types::workout::{
    Running, SportsWalking, SummaryReport, Swimming, Workout, MIN_IN_H, M_IN_KM,
};

fn per_hour(value: f64, duration_hours: f64) -> Result<f64, ComputeError> {
    if duration_hours == 0.0 {
        return Err(ComputeError::DivisionByZero {
            quantity: "duration_hours",
        });
    }
    Ok(value / duration_hours)
}

/// Floor division with the remainder-corrected rounding of integer-style `//`
/// on floats, so results stay exact on either side of a whole quotient.
pub fn floor_div(lhs: f64, rhs: f64, quantity: &'static str) -> Result<f64, ComputeError> {
    if rhs == 0.0 {
        return Err(ComputeError::DivisionByZero { quantity });
    }

    let rem = lhs % rhs;
    let mut div = (lhs - rem) / rhs;
    if rem != 0.0 && ((rhs < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }

    if div == 0.0 {
        return Ok(0.0_f64.copysign(lhs / rhs));
    }
    let mut floor = div.floor();
    if div - floor > 0.5 {
        floor += 1.0;
    }
    Ok(floor)
}

impl Running {
    pub fn distance(&self) -> f64 {
        self.action_count * Self::LEN_STEP / M_IN_KM
    }

    pub fn mean_speed(&self) -> Result<f64, ComputeError> {
        per_hour(self.distance(), self.duration_hours)
    }

    pub fn calories(&self) -> Result<f64, ComputeError> {
        Ok(
            (Self::COEFF_CALORIE_1 * self.mean_speed()? - Self::COEFF_CALORIE_2) * self.weight_kg
                / M_IN_KM
                * self.duration_hours
                * MIN_IN_H,
        )
    }
}

impl SportsWalking {
    pub fn distance(&self) -> f64 {
        self.action_count * Self::LEN_STEP / M_IN_KM
    }

    pub fn mean_speed(&self) -> Result<f64, ComputeError> {
        per_hour(self.distance(), self.duration_hours)
    }

    // speed² is floor-divided by height before scaling, not true-divided.
    pub fn calories(&self) -> Result<f64, ComputeError> {
        let speed_term = floor_div(
            self.mean_speed()?.powi(Self::SPEED_EXPONENT),
            self.height_cm,
            "height_cm",
        )?;
        Ok((Self::COEFF_CALORIE_1 * self.weight_kg
            + speed_term * Self::COEFF_CALORIE_2 * self.weight_kg)
            * self.duration_hours
            * MIN_IN_H)
    }
}

impl Swimming {
    pub fn distance(&self) -> f64 {
        self.action_count * Self::LEN_STEP / M_IN_KM
    }

    /// Pool-based speed; the stroke count plays no part here.
    pub fn mean_speed(&self) -> Result<f64, ComputeError> {
        per_hour(
            self.pool_length_m * self.pool_lap_count / M_IN_KM,
            self.duration_hours,
        )
    }

    pub fn calories(&self) -> Result<f64, ComputeError> {
        Ok((self.mean_speed()? + Self::COEFF_CALORIE_1) * Self::COEFF_CALORIE_2 * self.weight_kg)
    }
}

impl Workout {
    /// Distance in kilometers.
    pub fn distance(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance(),
            Workout::SportsWalking(w) => w.distance(),
            Workout::Swimming(w) => w.distance(),
        }
    }

    /// Mean speed in km/h.
    pub fn mean_speed(&self) -> Result<f64, ComputeError> {
        match self {
            Workout::Running(w) => w.mean_speed(),
            Workout::SportsWalking(w) => w.mean_speed(),
            Workout::Swimming(w) => w.mean_speed(),
        }
    }

    /// Spent kilocalories.
    pub fn calories(&self) -> Result<f64, ComputeError> {
        match self {
            Workout::Running(w) => w.calories(),
            Workout::SportsWalking(w) => w.calories(),
            Workout::Swimming(w) => w.calories(),
        }
    }

    pub fn summary(&self) -> Result<SummaryReport, ComputeError> {
        summarize(self)
    }
}

pub fn summarize(workout: &Workout) -> Result<SummaryReport, ComputeError> {
    let summary = SummaryReport {
        training_type: workout.label().to_string(),
        duration: workout.duration_hours(),
        distance: workout.distance(),
        speed: workout.mean_speed()?,
        calories: workout.calories()?,
    };

    tracing::debug!(
        "Computed {} summary ({:.3} km, {:.3} kcal)",
        summary.training_type,
        summary.distance,
        summary.calories
    );

    Ok(summary)
}
