/// Smallest frame delta a fixed-rate timeline may carry (caps playback at 125 updates/s).
pub const MIN_DT_MS: u32 = 8;

/// Frame rate assumed when a request does not carry one.
pub const DEFAULT_FPS: f64 = 60.0;

/// Whole-millisecond frame step for an fps hint, floored at [`MIN_DT_MS`].
///
/// Non-finite or sub-1 hints are treated as 1 fps.
pub fn frame_step_ms(fps: f64) -> u32 {
    let fps = if fps.is_finite() { fps.max(1.0) } else { 1.0 };
    let dt = (1000.0 / fps).round();
    (dt as u32).max(MIN_DT_MS)
}

/// Round a millisecond timestamp to a non-negative whole millisecond.
///
/// NaN maps to 0; `+inf` saturates.
pub fn clamp_time_ms(ms: f64) -> u64 {
    if ms.is_nan() || ms <= 0.0 {
        return 0;
    }
    ms.round() as u64
}

/// Round a frame delta to whole milliseconds and apply the [`MIN_DT_MS`] floor.
pub fn clamp_dt_ms(ms: f64) -> u32 {
    if ms.is_nan() {
        return MIN_DT_MS;
    }
    let rounded = ms.round().clamp(0.0, f64::from(u32::MAX)) as u32;
    rounded.max(MIN_DT_MS)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
