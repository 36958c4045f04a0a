// core/src/formulas.rs

pub const M_IN_KM: f64 = 1000.0; // meter per km
pub const MIN_IN_H: f64 = 60.0;  // minutter per time

pub const LEN_STEP_M: f64 = 0.65;   // meter per skritt (løp og gange)
pub const LEN_STROKE_M: f64 = 1.38; // meter per svømmetak

// Kalorikoeffisienter per treningstype.
pub const RUN_SPEED_FACTOR: f64 = 18.0;
pub const RUN_SPEED_SHIFT: f64 = 20.0;

pub const WLK_WEIGHT_FACTOR: f64 = 0.035;
pub const WLK_SPEED_HEIGHT_FACTOR: f64 = 0.029;

pub const SWM_SPEED_SHIFT: f64 = 1.1;
pub const SWM_WEIGHT_FACTOR: f64 = 2.0;

/// Distanse i km fra antall bevegelser og lengde per bevegelse (meter).
#[inline]
pub fn distance_km(action: u32, len_per_action_m: f64) -> f64 {
    f64::from(action) * len_per_action_m / M_IN_KM
}

/// Generisk snittfart: distanse delt på varighet.
#[inline]
pub fn mean_speed_kmh(distance_km: f64, duration_h: f64) -> f64 {
    distance_km / duration_h
}

/// Svømmefart regnes fra bassenglengde x antall lengder, ikke fra tak.
#[inline]
pub fn swim_speed_kmh(length_pool_m: f64, count_pool: u32, duration_h: f64) -> f64 {
    length_pool_m * f64::from(count_pool) / M_IN_KM / duration_h
}

/// Kalorier for løp.
pub fn run_calories(speed_kmh: f64, weight_kg: f64, duration_h: f64) -> f64 {
    (RUN_SPEED_FACTOR * speed_kmh - RUN_SPEED_SHIFT) * weight_kg / M_IN_KM
        * duration_h
        * MIN_IN_H
}

/// Kalorier for sportsgange.
/// Leddet v²/høyde rundes ned til nærmeste heltall før vekting.
pub fn walk_calories(speed_kmh: f64, weight_kg: f64, height_cm: f64, duration_h: f64) -> f64 {
    let speed_height_term = (speed_kmh * speed_kmh / height_cm).floor();
    (WLK_WEIGHT_FACTOR * weight_kg + speed_height_term * WLK_SPEED_HEIGHT_FACTOR * weight_kg)
        * duration_h
        * MIN_IN_H
}

/// Kalorier for svømming.
pub fn swim_calories(speed_kmh: f64, weight_kg: f64) -> f64 {
    (speed_kmh + SWM_SPEED_SHIFT) * SWM_WEIGHT_FACTOR * weight_kg
}
