use crate::types::TrainingSummary;

/// Rapportlinje per økt. Russisk ledetekst og tre desimaler er
/// kontrakten mot eksisterende konsumenter.
pub fn format_summary(info: &TrainingSummary) -> String {
    format!(
        "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
        info.training_type, info.duration_h, info.distance_km, info.speed_kmh, info.calories_kcal
    )
}

pub fn print_summary(info: &TrainingSummary) {
    println!("{}", format_summary(info));
}
