/// Time-based rate limiter for high-frequency event handlers. The caller
/// supplies the clock (milliseconds), which keeps this testable off-browser.
#[derive(Debug)]
pub struct Throttle {
    interval_ms: f64,
    last_run: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_run: None,
        }
    }

    /// Returns true when at least `interval_ms` has passed since the last
    /// accepted call, and records `now_ms` as the new reference point.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_run {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_run = Some(now_ms);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_is_always_ready() {
        let mut throttle = Throttle::new(16.0);
        assert!(throttle.ready(0.0));
    }

    #[test]
    fn calls_within_the_interval_are_rejected() {
        let mut throttle = Throttle::new(16.0);
        assert!(throttle.ready(100.0));
        assert!(!throttle.ready(110.0));
        assert!(!throttle.ready(115.9));
    }

    #[test]
    fn call_on_the_interval_boundary_is_ready() {
        let mut throttle = Throttle::new(16.0);
        assert!(throttle.ready(100.0));
        assert!(throttle.ready(116.0));
    }

    #[test]
    fn reference_point_moves_with_each_accepted_call() {
        let mut throttle = Throttle::new(16.0);
        assert!(throttle.ready(100.0));
        assert!(throttle.ready(120.0));
        // 130 is 10ms after the accepted call at 120, not after 100.
        assert!(!throttle.ready(130.0));
        assert!(throttle.ready(136.0));
    }
}
