//! Soft grey waves behind the onboarding greeting.

use std::f64::consts::PI;

/// Horizontal sampling step in CSS pixels.
pub const STEP_PX: f64 = 4.0;

/// Frame counter used for the single still frame under reduced motion.
pub const STILL_TIME: f64 = 100.0;

const BASE_ALPHA: f64 = 0.12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    pub rgb: (u8, u8, u8),
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
    pub speed: f64,
    /// Resting line as a fraction of the canvas height.
    pub y_offset: f64,
}

pub const WAVES: [Wave; 3] = [
    Wave {
        rgb: (60, 60, 60),
        amplitude: 100.0,
        frequency: 0.003,
        phase: 0.0,
        speed: 0.004,
        y_offset: 0.3,
    },
    Wave {
        rgb: (80, 80, 80),
        amplitude: 90.0,
        frequency: 0.002,
        phase: PI * 0.5,
        speed: 0.006,
        y_offset: 0.5,
    },
    Wave {
        rgb: (40, 40, 40),
        amplitude: 120.0,
        frequency: 0.0025,
        phase: PI,
        speed: 0.005,
        y_offset: 0.7,
    },
];

impl Wave {
    pub fn base_y(&self, height: f64) -> f64 {
        height * self.y_offset
    }

    /// Height of the crest at `x`. `time` is a frame count.
    pub fn y_at(&self, x: f64, base_y: f64, time: f64, animated: bool) -> f64 {
        if !animated {
            return base_y + (x * self.frequency + self.phase).sin() * self.amplitude;
        }
        base_y
            + (x * self.frequency + time * self.speed + self.phase).sin() * self.amplitude
            + (x * self.frequency * 0.6 + time * self.speed * 0.8 + self.phase * 0.5).sin()
                * (self.amplitude * 0.4)
    }

    /// Crest polyline from x = 0 to `width` inclusive.
    pub fn outline(&self, width: f64, height: f64, time: f64, animated: bool) -> Vec<(f64, f64)> {
        let base = self.base_y(height);
        let steps = (width.max(0.0) / STEP_PX).floor() as usize;
        (0..=steps)
            .map(|i| {
                let x = i as f64 * STEP_PX;
                (x, self.y_at(x, base, time, animated))
            })
            .collect()
    }

    pub fn alpha(&self, time: f64, animated: bool) -> f64 {
        if animated {
            BASE_ALPHA + (time * 0.008 + self.phase).sin() * 0.04
        } else {
            BASE_ALPHA
        }
    }

    /// Vertical gradient stops `(offset, css color)` for the fill.
    pub fn stops(&self, time: f64, animated: bool) -> Vec<(f32, String)> {
        let alpha = self.alpha(time, animated);
        if animated {
            vec![
                (0.0, self.rgba(alpha)),
                (0.6, self.rgba(alpha * 0.5)),
                (1.0, self.rgba(0.0)),
            ]
        } else {
            vec![(0.0, self.rgba(alpha)), (1.0, self.rgba(0.0))]
        }
    }

    fn rgba(&self, alpha: f64) -> String {
        let (r, g, b) = self.rgb;
        format!("rgba({r}, {g}, {b}, {alpha})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn still_frame_ignores_time() {
        let wave = WAVES[1];
        assert_eq!(wave.y_at(120.0, 300.0, 0.0, false), wave.y_at(120.0, 300.0, 5000.0, false));
        assert_eq!(wave.alpha(777.0, false), 0.12);
        assert_eq!(wave.stops(0.0, false).len(), 2);
    }

    #[test]
    fn animated_crest_stays_within_amplitude_band() {
        for wave in WAVES {
            let base = wave.base_y(1000.0);
            for (_, y) in wave.outline(1280.0, 1000.0, 321.0, true) {
                assert!((y - base).abs() <= wave.amplitude * 1.4 + 1e-9);
            }
        }
    }

    #[test]
    fn outline_includes_both_edges() {
        let points = WAVES[0].outline(400.0, 600.0, 0.0, true);
        assert_eq!(points.len(), 101);
        assert_eq!(points.first().map(|p| p.0), Some(0.0));
        assert_eq!(points.last().map(|p| p.0), Some(400.0));
    }

    #[test]
    fn stops_fade_to_transparent() {
        let stops = WAVES[2].stops(0.0, true);
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[2].1, "rgba(40, 40, 40, 0)");
        // sin(pi) ~ 0 at t = 0
        assert!(stops[0].1.starts_with("rgba(40, 40, 40, 0.12"));
    }
}
