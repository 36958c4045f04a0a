use trackfit_core::{print_summary, read_package};

/// Faste demopakker fra sensoren: (kode, dataserie).
const PACKAGES: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

fn main() -> anyhow::Result<()> {
    for (workout_type, data) in PACKAGES {
        let workout = read_package(workout_type, data)?;
        print_summary(&workout.summary());
    }
    Ok(())
}
