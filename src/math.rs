#[cfg(feature = "std")]
pub fn round(value: f64) -> f64 {
    value.round()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub fn round(value: f64) -> f64 {
    libm::round(value)
}

#[cfg(feature = "std")]
pub fn floor(value: f64) -> f64 {
    value.floor()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub fn floor(value: f64) -> f64 {
    libm::floor(value)
}

/// Rounds half away from zero to one decimal place.
pub fn round_tenths(value: f64) -> f64 {
    round(value * 10.0) / 10.0
}

/// Rounds half away from zero to two decimal places.
pub fn round_hundredths(value: f64) -> f64 {
    round(value * 100.0) / 100.0
}
