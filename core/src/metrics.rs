use once_cell::sync::Lazy;
use prometheus::{IntCounter, Opts, Registry};

/// Egen registry slik at innbyggende prosesser kan eksportere tellerne.
pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

static PACKAGES_READ_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register(
        IntCounter::with_opts(Opts::new(
            "packages_read_total",
            "Antall sensorpakker lest og bygget",
        ))
        .unwrap(),
    )
});

static UNKNOWN_WORKOUT_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register(
        IntCounter::with_opts(Opts::new(
            "unknown_workout_total",
            "Antall pakker med ukjent sensorkode",
        ))
        .unwrap(),
    )
});

static WRONG_ARITY_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register(
        IntCounter::with_opts(Opts::new(
            "wrong_arity_total",
            "Antall pakker med feil antall verdier",
        ))
        .unwrap(),
    )
});

fn register(c: IntCounter) -> IntCounter {
    REGISTRY.register(Box::new(c.clone())).unwrap();
    c
}

pub fn packages_read_total() -> &'static IntCounter {
    &*PACKAGES_READ_TOTAL
}

pub fn unknown_workout_total() -> &'static IntCounter {
    &*UNKNOWN_WORKOUT_TOTAL
}

pub fn wrong_arity_total() -> &'static IntCounter {
    &*WRONG_ARITY_TOTAL
}
