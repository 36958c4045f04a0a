// tests/test_report.rs
// Linje-for-linje-sjekk av rapportformatet mot kjente sensorpakker.

use trackfit_core::{format_summary, read_package};

#[test]
fn swm_line_is_exact() {
    let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let line = format_summary(&workout.summary());
    assert_eq!(
        line,
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
         Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
    );
}

#[test]
fn run_line_is_exact() {
    let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    let line = format_summary(&workout.summary());
    assert_eq!(
        line,
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
         Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
    );
}

#[test]
fn wlk_line_is_exact() {
    let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    let line = format_summary(&workout.summary());
    assert_eq!(
        line,
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
         Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500."
    );
}

#[test]
fn lines_keep_input_order() {
    let packages: &[(&str, &[f64])] = &[
        ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", &[15000.0, 1.0, 75.0]),
        ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ];

    let mut labels = Vec::new();
    for (workout_type, data) in packages {
        let workout = read_package(workout_type, data).expect("demopakkene skal alltid bygges");
        labels.push(workout.summary().training_type);
    }
    assert_eq!(labels, ["Swimming", "Running", "SportsWalking"]);
}
