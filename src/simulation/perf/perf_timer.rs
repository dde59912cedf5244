//! Frame-phase timing for `PerfStats`

/// Milliseconds on the host clock. wasm32-unknown-unknown has no
/// `Instant`, so the browser's `Date.now()` is used there.
#[cfg(target_arch = "wasm32")]
fn clock_ms() -> f64 {
    js_sys::Date::now()
}

/// Milliseconds since the first call in this process
#[cfg(not(target_arch = "wasm32"))]
fn clock_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Run `f`, returning its output and the milliseconds it took.
/// The clock is not read when `enabled` is false and the time is `0.0`.
#[inline]
pub(crate) fn timed<R>(enabled: bool, f: impl FnOnce() -> R) -> (R, f64) {
    if !enabled {
        return (f(), 0.0);
    }
    let started = clock_ms();
    let out = f();
    (out, (clock_ms() - started).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_timing_reports_zero() {
        let (out, ms) = timed(false, || 7);
        assert_eq!(out, 7);
        assert_eq!(ms, 0.0);
    }

    #[test]
    fn enabled_timing_measures_the_closure() {
        let (_, ms) = timed(true, || std::thread::sleep(std::time::Duration::from_millis(2)));
        assert!(ms >= 1.0, "measured {ms} ms");
    }
}
