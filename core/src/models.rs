use serde::{Deserialize, Serialize};

use crate::formulas;
use crate::types::TrainingSummary;

/// Løpeøkt fra skritteller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Running {
    pub action: u32,     // skritt
    pub duration_h: f64, // timer
    pub weight_kg: f64,
}

/// Sportsgange. Høyde (cm) inngår i kaloriformelen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SportsWalking {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// Svømmeøkt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Swimming {
    pub action: u32, // svømmetak
    pub duration_h: f64,
    pub weight_kg: f64,
    pub length_pool_m: f64,
    pub count_pool: u32, // antall bassenglengder
}

/// Lukket sett av treningstyper. Formlene velges med match;
/// Swimming overstyrer fartsformelen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    /// Etikett brukt i rapportlinjen.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Workout::Running(_) => "Running",
            Workout::SportsWalking(_) => "SportsWalking",
            Workout::Swimming(_) => "Swimming",
        }
    }

    pub fn duration_h(&self) -> f64 {
        match self {
            Workout::Running(w) => w.duration_h,
            Workout::SportsWalking(w) => w.duration_h,
            Workout::Swimming(w) => w.duration_h,
        }
    }

    /// Distanse i km fra antall bevegelser.
    pub fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(w) => formulas::distance_km(w.action, formulas::LEN_STEP_M),
            Workout::SportsWalking(w) => formulas::distance_km(w.action, formulas::LEN_STEP_M),
            Workout::Swimming(w) => formulas::distance_km(w.action, formulas::LEN_STROKE_M),
        }
    }

    /// Snittfart i km/t.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Swimming(w) => {
                formulas::swim_speed_kmh(w.length_pool_m, w.count_pool, w.duration_h)
            }
            _ => formulas::mean_speed_kmh(self.distance_km(), self.duration_h()),
        }
    }

    /// Kaloriforbruk etter formelen for treningstypen.
    pub fn spent_calories(&self) -> f64 {
        let v = self.mean_speed_kmh();
        match self {
            Workout::Running(w) => formulas::run_calories(v, w.weight_kg, w.duration_h),
            Workout::SportsWalking(w) => {
                formulas::walk_calories(v, w.weight_kg, w.height_cm, w.duration_h)
            }
            Workout::Swimming(w) => formulas::swim_calories(v, w.weight_kg),
        }
    }

    /// Ferdig sammendrag for rapportering.
    pub fn summary(&self) -> TrainingSummary {
        TrainingSummary {
            training_type: self.kind_label().to_string(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }
}
