use serde::{Deserialize, Serialize};

/// Ferdig utregnet sammendrag for én økt.
/// Lages på nytt per pakke og endres ikke etterpå.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub training_type: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}
