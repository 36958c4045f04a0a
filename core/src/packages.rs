use serde::Deserialize;
use serde_json::{self as json};
use serde_path_to_error as spte;

use crate::dispatch::{read_package, PackageError};
use crate::models::Workout;
use crate::types::TrainingSummary;

// OBJECT-form: { "workout_type": "RUN", "data": [15000, 1, 75] }
#[derive(Debug, Deserialize)]
struct PackageObject {
    #[serde(alias = "code", alias = "type")]
    workout_type: String,
    data: Vec<f64>,
}

// Legacy-form: ["RUN", [15000, 1, 75]]
#[derive(Debug, Deserialize)]
struct PackageLegacy(String, Vec<f64>);

// Prøv OBJECT først, deretter legacy.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PackageIn {
    Object(PackageObject),
    Legacy(PackageLegacy),
}

impl PackageIn {
    fn into_parts(self) -> (String, Vec<f64>) {
        match self {
            PackageIn::Object(p) => (p.workout_type, p.data),
            PackageIn::Legacy(PackageLegacy(code, data)) => (code, data),
        }
    }
}

/// Leser en JSON-serie av pakker og bygger treningstypene.
/// Første feil avbryter hele serien.
pub fn read_packages_json(input: &str) -> Result<Vec<Workout>, PackageError> {
    let mut de = json::Deserializer::from_str(input);
    let packages: Vec<PackageIn> = spte::deserialize(&mut de).map_err(|e| {
        log::debug!("pakke-parse feilet ved {}", e.path());
        PackageError::Parse(format!("at {}: {}", e.path(), e.inner()))
    })?;

    packages
        .into_iter()
        .map(|p| {
            let (code, data) = p.into_parts();
            read_package(&code, &data)
        })
        .collect()
}

/// Sammendrag for en JSON-serie av pakker, som JSON-array av `TrainingSummary`.
pub fn summarize_packages_json(input: &str) -> Result<String, PackageError> {
    let workouts = read_packages_json(input)?;
    let summaries: Vec<TrainingSummary> = workouts.iter().map(Workout::summary).collect();
    json::to_string(&summaries).map_err(|e| PackageError::Parse(e.to_string()))
}
