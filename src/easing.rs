//! CSS `cubic-bezier()` timing functions.

/// A timing curve through (0,0), (x1,y1), (x2,y2), (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// `cubic-bezier(0.645, 0.045, 0.355, 1)`, used by the greeting letters.
pub const EASE_IN_OUT_CUBIC: CubicBezier = CubicBezier::new(0.645, 0.045, 0.355, 1.0);

/// `cubic-bezier(0.4, 0, 0.2, 1)`, used by the card flip.
pub const STANDARD: CubicBezier = CubicBezier::new(0.4, 0.0, 0.2, 1.0);

/// Polynomial coefficients `(a, b, c)` of one Bézier axis: `((a*t + b)*t + c)*t`.
fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (a, b, c)
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        CubicBezier { x1, y1, x2, y2 }
    }

    fn x(&self, t: f64) -> f64 {
        let (a, b, c) = coefficients(self.x1, self.x2);
        ((a * t + b) * t + c) * t
    }

    fn y(&self, t: f64) -> f64 {
        let (a, b, c) = coefficients(self.y1, self.y2);
        ((a * t + b) * t + c) * t
    }

    fn dx(&self, t: f64) -> f64 {
        let (a, b, c) = coefficients(self.x1, self.x2);
        (3.0 * a * t + 2.0 * b) * t + c
    }

    /// Curve parameter whose x equals `x`.
    fn solve_t(&self, x: f64) -> f64 {
        const EPS: f64 = 1e-7;

        let mut t = x;
        for _ in 0..8 {
            let err = self.x(t) - x;
            if err.abs() < EPS {
                return t;
            }
            let d = self.dx(t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        // Newton stalled; bisect.
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        while lo < hi {
            let v = self.x(t);
            if (v - x).abs() < EPS {
                break;
            }
            if x > v {
                lo = t;
            } else {
                hi = t;
            }
            let next = (lo + hi) / 2.0;
            if next == t {
                break;
            }
            t = next;
        }
        t
    }

    /// Eased value for linear progress `x` in `[0, 1]`.
    pub fn ease(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        self.y(self.solve_t(x))
    }

    /// Eased progress of a transition that starts `delay` seconds in and runs
    /// for `duration` seconds, sampled `elapsed` seconds after it was queued.
    pub fn progress(&self, elapsed: f64, delay: f64, duration: f64) -> f64 {
        if duration <= 0.0 {
            return if elapsed >= delay { 1.0 } else { 0.0 };
        }
        self.ease((elapsed - delay) / duration)
    }
}

/// Linear interpolation from `from` to `to`.
#[inline]
pub fn lerp(from: f64, to: f64, k: f64) -> f64 {
    from + (to - from) * k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for curve in [EASE_IN_OUT_CUBIC, STANDARD] {
            assert_eq!(curve.ease(0.0), 0.0);
            assert_eq!(curve.ease(1.0), 1.0);
            assert_eq!(curve.ease(-3.0), 0.0);
            assert_eq!(curve.ease(7.0), 1.0);
        }
    }

    #[test]
    fn linear_control_points_give_identity() {
        let linear = CubicBezier::new(0.25, 0.25, 0.75, 0.75);
        for i in 0..=20 {
            let x = i as f64 / 20.0;
            assert!((linear.ease(x) - x).abs() < 1e-6, "x={x}");
        }
    }

    #[test]
    fn ease_in_out_is_slow_at_both_ends() {
        // t = 0.5 -> x = 0.5 exactly, y = 0.516875
        assert!((EASE_IN_OUT_CUBIC.ease(0.5) - 0.516875).abs() < 1e-5);
        assert!(EASE_IN_OUT_CUBIC.ease(0.2) < 0.2);
        assert!(EASE_IN_OUT_CUBIC.ease(0.8) > 0.8);
    }

    #[test]
    fn monotone() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = STANDARD.ease(i as f64 / 100.0);
            assert!(v >= prev - 1e-9);
            prev = v;
        }
    }

    #[test]
    fn delayed_progress() {
        assert_eq!(STANDARD.progress(0.1, 0.4, 0.5), 0.0);
        assert_eq!(STANDARD.progress(1.0, 0.4, 0.5), 1.0);
        assert_eq!(STANDARD.progress(0.3, 0.3, 0.0), 1.0);
        assert_eq!(lerp(80.0, 0.0, 0.25), 60.0);
    }
}
