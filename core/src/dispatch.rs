use std::collections::HashMap;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::metrics;
use crate::models::{Running, SportsWalking, Swimming, Workout};

/// Feil fra pakke-dispatch.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("workout kind not found: {code}")]
    UnknownWorkout { code: String },
    #[error("wrong data length for {kind}: expected {expected}, got {got}")]
    WrongArity {
        kind: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("package parse failed: {0}")]
    Parse(String),
}

struct KindEntry {
    label: &'static str,
    arity: usize,
    build: fn(&[f64]) -> Workout,
}

/// Dispatch-tabell fra sensorkode til treningstype.
/// Dataserien pakkes ut posisjonelt i feltrekkefølge.
static KINDS: Lazy<HashMap<&'static str, KindEntry>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        "SWM",
        KindEntry {
            label: "Swimming",
            arity: 5,
            build: |d| {
                Workout::Swimming(Swimming {
                    action: d[0] as u32,
                    duration_h: d[1],
                    weight_kg: d[2],
                    length_pool_m: d[3],
                    count_pool: d[4] as u32,
                })
            },
        },
    );
    m.insert(
        "RUN",
        KindEntry {
            label: "Running",
            arity: 3,
            build: |d| {
                Workout::Running(Running {
                    action: d[0] as u32,
                    duration_h: d[1],
                    weight_kg: d[2],
                })
            },
        },
    );
    m.insert(
        "WLK",
        KindEntry {
            label: "SportsWalking",
            arity: 4,
            build: |d| {
                Workout::SportsWalking(SportsWalking {
                    action: d[0] as u32,
                    duration_h: d[1],
                    weight_kg: d[2],
                    height_cm: d[3],
                })
            },
        },
    );
    m
});

/// Slår opp sensorkoden og bygger riktig treningstype fra dataserien.
/// Antall verdier valideres mot tabellen før noe bygges.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, PackageError> {
    let kind = match KINDS.get(workout_type) {
        Some(k) => k,
        None => {
            log::warn!("ukjent sensorkode: {workout_type}");
            metrics::unknown_workout_total().inc();
            return Err(PackageError::UnknownWorkout {
                code: workout_type.to_string(),
            });
        }
    };

    if data.len() != kind.arity {
        metrics::wrong_arity_total().inc();
        return Err(PackageError::WrongArity {
            kind: kind.label,
            expected: kind.arity,
            got: data.len(),
        });
    }

    metrics::packages_read_total().inc();
    Ok((kind.build)(data))
}
