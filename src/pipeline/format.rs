use crate::types::workout::SummaryReport;

/// Renders the one-line training message with three-decimal metrics.
pub fn message(summary: &SummaryReport) -> String {
    format!(
        "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
        summary.training_type,
        summary.duration,
        summary.distance,
        summary.speed,
        summary.calories
    )
}

impl SummaryReport {
    pub fn message(&self) -> String {
        message(self)
    }
}
