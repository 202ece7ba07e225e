//! Small helpers: formatting plus host time and randomness sources.

pub mod format;

/// Current host clock in unix milliseconds.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Current host clock in unix seconds.
pub fn now_secs() -> u64 {
    (js_sys::Date::now() / 1_000.0) as u64
}

/// Uniform random in `[0, 1)` from the host.
pub fn random_roll() -> f64 {
    js_sys::Math::random()
}
