//! Dot-grid pattern registry.
//!
//! Every pattern maps a dot's `(row, col)` inside a `size × size` grid and an
//! elapsed time in (scaled) seconds to a target opacity and scale. They are
//! plain functions with no state: the animator in [`crate::grid`] samples
//! them once per frame and smooths towards the result.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::CraftError;
use crate::grid::GridSize;

/// Target visual state for one dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternResult {
    pub opacity: f64,
    pub scale: f64,
}

impl PatternResult {
    /// Lerp both channels from their floor to 1 by `intensity`.
    fn lit(intensity: f64, min_opacity: f64, min_scale: f64) -> Self {
        PatternResult {
            opacity: min_opacity + intensity * (1.0 - min_opacity),
            scale: min_scale + intensity * (1.0 - min_scale),
        }
    }
}

/// Raw pattern function. Callers must pass `size >= 2` and `row, col < size`.
pub type PatternFn = fn(row: usize, col: usize, size: usize, time: f64) -> PatternResult;

fn center(size: usize) -> f64 {
    (size as f64 - 1.0) / 2.0
}

fn distance_from_center(row: usize, col: usize, size: usize) -> f64 {
    let c = center(size);
    (row as f64 - c).hypot(col as f64 - c)
}

/// Corner-to-center distance.
fn max_distance(size: usize) -> f64 {
    let c = center(size);
    (2.0 * c * c).sqrt()
}

/// Position along a boustrophedon walk of the grid.
fn snake_index(row: usize, col: usize, size: usize) -> usize {
    if row % 2 == 0 {
        row * size + col
    } else {
        row * size + (size - 1 - col)
    }
}

/// Cheap deterministic hash of `seed` into `[0, 1)`.
fn pseudo_random(seed: f64) -> f64 {
    let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
    x - x.floor()
}

/// Unit sine wave remapped to `[0, 1]`.
fn unit_sin(x: f64) -> f64 {
    (x.sin() + 1.0) / 2.0
}

fn pulse(_row: usize, _col: usize, _size: usize, time: f64) -> PatternResult {
    PatternResult::lit(unit_sin(time * 3.0), 0.3, 0.6)
}

fn wave(row: usize, col: usize, size: usize, time: f64) -> PatternResult {
    let pos = (row + col) as f64 / (size as f64 * 2.0);
    let phase = pos * PI * 2.0;
    PatternResult::lit(unit_sin(time * 2.5 + phase * 3.0), 0.2, 0.5)
}

fn wave_diagonal(row: usize, col: usize, size: usize, time: f64) -> PatternResult {
    let pos = (row as f64 - col as f64 + size as f64) / (size as f64 * 2.0);
    let phase = pos * PI * 2.0;
    PatternResult::lit(unit_sin(time * 2.0 + phase * 4.0), 0.15, 0.4)
}

fn ripple(row: usize, col: usize, size: usize, time: f64) -> PatternResult {
    let dist = distance_from_center(row, col, size) / max_distance(size);
    PatternResult::lit(unit_sin(time * 3.0 - dist * PI * 4.0), 0.2, 0.5)
}

fn snake(row: usize, col: usize, size: usize, time: f64) -> PatternResult {
    let index = snake_index(row, col, size) as f64;
    let total = (size * size) as f64;
    let progress = ((time * 0.8) % 1.0) * total;
    let tail = total * 0.3;
    let intensity = (1.0 - (index - progress).abs() / tail).max(0.0);
    PatternResult::lit(intensity, 0.15, 0.5)
}

fn cascade(row: usize, col: usize, size: usize, time: f64) -> PatternResult {
    let span = size as f64 - 1.0;
    let delay = row as f64 / span * 0.5 + col as f64 / span * 0.25;
    PatternResult::lit(unit_sin(time * 2.5 - delay * PI * 2.0), 0.2, 0.45)
}

fn checkerboard(row: usize, col: usize, _size: usize, time: f64) -> PatternResult {
    let phase = if (row + col) % 2 == 0 { 0.0 } else { PI };
    PatternResult::lit(unit_sin(time * 2.5 + phase), 0.15, 0.4)
}

fn rain(row: usize, col: usize, size: usize, time: f64) -> PatternResult {
    let size = size as f64;
    let seed = pseudo_random(col as f64 * 100.0);
    let speed = 1.5 + seed * 1.5;
    let offset = seed * size;
    let drop = ((time * speed + offset) % (size + 2.0)) - 1.0;
    let intensity = (1.0 - (row as f64 - drop).abs() / 1.5).max(0.0);
    PatternResult::lit(intensity, 0.1, 0.4)
}

fn heartbeat(row: usize, col: usize, size: usize, time: f64) -> PatternResult {
    let dist = distance_from_center(row, col, size) / max_distance(size);
    let sharp_beat = (time * 4.0).sin().abs().powi(8);
    let delayed = time - dist * 0.15;
    let intensity = (delayed * 4.0).sin().abs().powi(8);
    PatternResult {
        opacity: 0.2 + intensity * 0.8,
        scale: 0.5 + sharp_beat * 0.3 + intensity * 0.2,
    }
}

fn orbit(row: usize, col: usize, size: usize, time: f64) -> PatternResult {
    let c = center(size);
    let angle = (row as f64 - c).atan2(col as f64 - c);
    let dist = distance_from_center(row, col, size) / max_distance(size);
    let angle_diff = ((angle - time * 2.0) / 2.0).sin().abs();
    // Only the ring at ~60% of the radius lights up.
    let radius_match = 1.0 - (dist - 0.6).abs() * 3.0;
    let intensity = ((1.0 - angle_diff) * radius_match).max(0.0);
    PatternResult::lit(intensity, 0.15, 0.45)
}

fn cross(row: usize, col: usize, size: usize, time: f64) -> PatternResult {
    let c = center(size);
    let dr = (row as f64 - c).abs();
    let dc = (col as f64 - c).abs();
    let on_cross = dr < 0.5 || dc < 0.5;
    let dist = if on_cross {
        dr.min(dc) + dr.max(dc)
    } else {
        distance_from_center(row, col, size)
    };
    let normalized = dist / (size as f64 - 1.0);
    let distance = (normalized - (time * 1.5) % 1.0).abs();
    let intensity = if on_cross {
        (1.0 - distance * 4.0).max(0.0)
    } else {
        (0.3 - distance).max(0.0)
    };
    PatternResult::lit(intensity, 0.1, 0.4)
}

fn corners(row: usize, col: usize, size: usize, time: f64) -> PatternResult {
    let (r, c) = (row as f64, col as f64);
    let far = size as f64 - 1.0;
    // top-left, top-right, bottom-left, bottom-right
    let corner_dists = [
        r.hypot(c),
        r.hypot(far - c),
        (far - r).hypot(c),
        (far - r).hypot(far - c),
    ];
    let max_dist = 2f64.sqrt() * far;
    let corner = ((time * 0.5) % 4.0).floor() as usize;
    let progress = (time * 0.5) % 1.0;
    let normalized = corner_dists[corner.min(3)] / max_dist;
    let intensity = (1.0 - (normalized - progress).abs() * 4.0).max(0.0);
    PatternResult::lit(intensity, 0.15, 0.45)
}

fn scan(row: usize, _col: usize, size: usize, time: f64) -> PatternResult {
    let normalized = row as f64 / (size as f64 - 1.0);
    let line = (time * 0.8) % 1.0;
    let intensity = (1.0 - (normalized - line).abs() * 5.0).max(0.0);
    PatternResult::lit(intensity, 0.1, 0.4)
}

fn dna(row: usize, col: usize, size: usize, time: f64) -> PatternResult {
    let c = center(size);
    let normalized = row as f64 / (size as f64 - 1.0);
    let amplitude = size as f64 / 4.0;
    // Two strands half a period apart.
    let strand1 = (normalized * PI * 2.0 + time * 2.0).sin() * amplitude;
    let strand2 = (normalized * PI * 2.0 + time * 2.0 + PI).sin() * amplitude;
    let offset = col as f64 - c;
    let min_dist = (offset - strand1).abs().min((offset - strand2).abs());
    let intensity = (1.0 - min_dist / 1.5).max(0.0);
    PatternResult::lit(intensity, 0.1, 0.4)
}

fn stagger(row: usize, col: usize, _size: usize, time: f64) -> PatternResult {
    let delay = row as f64 * 0.15 + col as f64 * 0.05;
    PatternResult::lit(unit_sin(time * 3.0 - delay * PI), 0.2, 0.5)
}

fn pinwheel(row: usize, col: usize, size: usize, time: f64) -> PatternResult {
    let c = center(size);
    let angle = (row as f64 - c).atan2(col as f64 - c);
    let blade = unit_sin((angle + time * 1.5) * 2.0);
    let edge_fade = 1.0 - distance_from_center(row, col, size) / max_distance(size) * 0.3;
    PatternResult::lit(blade * edge_fade, 0.15, 0.45)
}

fn radar(row: usize, col: usize, size: usize, time: f64) -> PatternResult {
    let c = center(size);
    let angle = (row as f64 - c).atan2(col as f64 - c);
    let normalized = (angle + PI) / (2.0 * PI);
    let sweep = (time * 0.5) % 1.0;
    let diff = (normalized - sweep).abs();
    let wrapped = diff.min(1.0 - diff);
    let intensity = (1.0 - wrapped * 8.0).max(0.0);
    PatternResult::lit(intensity, 0.1, 0.4)
}

fn diamond(row: usize, col: usize, size: usize, time: f64) -> PatternResult {
    let c = center(size);
    let manhattan = (row as f64 - c).abs() + (col as f64 - c).abs();
    let normalized = manhattan / (size as f64 - 1.0);
    let front = (time * 1.2) % 1.0;
    let intensity = (1.0 - (normalized - front).abs() * 5.0).max(0.0);
    PatternResult::lit(intensity, 0.15, 0.45)
}

/// Walk order for the 3×3 spiral: center, right, up, then outward.
const SPIRAL_3X3: [(usize, usize); 9] = [
    (1, 1),
    (1, 2),
    (0, 2),
    (0, 1),
    (0, 0),
    (1, 0),
    (2, 0),
    (2, 1),
    (2, 2),
];

fn fibonacci(row: usize, col: usize, size: usize, time: f64) -> PatternResult {
    const TAIL: f64 = 3.0;
    // Cells off the spiral sit one step before its head.
    let index = SPIRAL_3X3
        .iter()
        .position(|&cell| cell == (row, col))
        .map_or(-1.0, |i| i as f64);
    let total = (size * size) as f64;
    let progress = ((time * 0.6) % 1.0) * (total + TAIL);
    let distance = index - progress;
    let intensity = if (-TAIL..=0.0).contains(&distance) {
        1.0 - distance.abs() / TAIL
    } else {
        0.0
    };
    PatternResult::lit(intensity, 0.1, 0.4)
}

fn wave_interference(row: usize, col: usize, size: usize, time: f64) -> PatternResult {
    let far = size as f64 - 1.0;
    let sources = [(0.0, 0.0), (0.0, far), (far, 0.0), (far, far)];
    let (r, c) = (row as f64, col as f64);
    let total: f64 = sources
        .iter()
        .enumerate()
        .map(|(i, &(sr, sc))| {
            let dist = (r - sr).hypot(c - sc);
            let phase = i as f64 * PI / 2.0;
            (time * 3.0 - dist * 2.0 + phase).sin()
        })
        .sum();
    let intensity = (total / sources.len() as f64 + 1.0) / 2.0;
    PatternResult::lit(intensity, 0.1, 0.4)
}

fn gravity_wells(row: usize, col: usize, size: usize, time: f64) -> PatternResult {
    let c = center(size);
    let radius = size as f64 * 0.4;
    let (r, k) = (row as f64, col as f64);
    let well = |angle: f64| {
        let (wr, wc) = (c + angle.cos() * radius, c + angle.sin() * radius);
        (r - wr).hypot(k - wc)
    };
    let d1 = well(time * 1.5);
    let d2 = well(time * 1.5 + PI);
    let gravity = 1.0 / (d1 + 0.5) + 1.0 / (d2 + 0.5);
    PatternResult::lit((gravity / 2.0).min(1.0), 0.15, 0.45)
}

fn kaleidoscope(row: usize, col: usize, size: usize, time: f64) -> PatternResult {
    let c = center(size);
    let mirror = |v: usize| if v as f64 <= c { v } else { size - 1 - v };
    let seed = (mirror(row) * 10 + mirror(col)) as f64;
    let phase = pseudo_random(seed) * PI * 2.0;
    let freq = 2.0 + pseudo_random(seed * 2.0);
    PatternResult::lit(unit_sin(time * freq + phase), 0.15, 0.45)
}

fn perlin_flow(row: usize, col: usize, _size: usize, time: f64) -> PatternResult {
    let x = col as f64 * 0.8 + time * 0.5;
    let y = row as f64 * 0.8 + time * 0.3;
    // Layered sines standing in for gradient noise.
    let noise = (x * 1.2 + y * 0.8).sin() * 0.5
        + (x * 0.7 - y * 1.3 + time).sin() * 0.3
        + ((x + y) * 0.9 + time * 0.7).sin() * 0.2;
    PatternResult::lit((noise + 1.0) / 2.0, 0.2, 0.5)
}

fn quantum(row: usize, col: usize, size: usize, time: f64) -> PatternResult {
    let probability = 1.0 - distance_from_center(row, col, size) / max_distance(size) * 0.7;
    let seed = (row * size + col) as f64 + (time * 8.0).floor();
    let random = pseudo_random(seed);
    let flicker = if random < probability {
        0.7 + random * 0.3
    } else {
        0.1 + random * 0.2
    };
    PatternResult {
        opacity: flicker,
        scale: 0.4 + flicker * 0.5,
    }
}

/// Registry of every pattern the dot grid can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Pulse,
    Wave,
    WaveDiagonal,
    Ripple,
    Snake,
    Cascade,
    Checkerboard,
    Rain,
    Heartbeat,
    Orbit,
    Cross,
    Corners,
    Scan,
    Dna,
    Stagger,
    Pinwheel,
    Radar,
    Diamond,
    Fibonacci,
    WaveInterference,
    GravityWells,
    Kaleidoscope,
    PerlinFlow,
    Quantum,
}

impl Pattern {
    pub const ALL: [Pattern; 24] = [
        Pattern::Pulse,
        Pattern::Wave,
        Pattern::WaveDiagonal,
        Pattern::Ripple,
        Pattern::Snake,
        Pattern::Cascade,
        Pattern::Checkerboard,
        Pattern::Rain,
        Pattern::Heartbeat,
        Pattern::Orbit,
        Pattern::Cross,
        Pattern::Corners,
        Pattern::Scan,
        Pattern::Dna,
        Pattern::Stagger,
        Pattern::Pinwheel,
        Pattern::Radar,
        Pattern::Diamond,
        Pattern::Fibonacci,
        Pattern::WaveInterference,
        Pattern::GravityWells,
        Pattern::Kaleidoscope,
        Pattern::PerlinFlow,
        Pattern::Quantum,
    ];

    /// Registry key, as used in URLs and `data-pattern` attributes.
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Pulse => "pulse",
            Pattern::Wave => "wave",
            Pattern::WaveDiagonal => "waveDiagonal",
            Pattern::Ripple => "ripple",
            Pattern::Snake => "snake",
            Pattern::Cascade => "cascade",
            Pattern::Checkerboard => "checkerboard",
            Pattern::Rain => "rain",
            Pattern::Heartbeat => "heartbeat",
            Pattern::Orbit => "orbit",
            Pattern::Cross => "cross",
            Pattern::Corners => "corners",
            Pattern::Scan => "scan",
            Pattern::Dna => "dna",
            Pattern::Stagger => "stagger",
            Pattern::Pinwheel => "pinwheel",
            Pattern::Radar => "radar",
            Pattern::Diamond => "diamond",
            Pattern::Fibonacci => "fibonacci",
            Pattern::WaveInterference => "waveInterference",
            Pattern::GravityWells => "gravityWells",
            Pattern::Kaleidoscope => "kaleidoscope",
            Pattern::PerlinFlow => "perlinFlow",
            Pattern::Quantum => "quantum",
        }
    }

    /// Card caption.
    pub fn label(self) -> &'static str {
        match self {
            Pattern::Pulse => "Pulse",
            Pattern::Wave => "Wave",
            Pattern::WaveDiagonal => "Wave Diagonal",
            Pattern::Ripple => "Ripple",
            Pattern::Snake => "Snake",
            Pattern::Cascade => "Cascade",
            Pattern::Checkerboard => "Checkerboard",
            Pattern::Rain => "Rain",
            Pattern::Heartbeat => "Heartbeat",
            Pattern::Orbit => "Orbit",
            Pattern::Cross => "Cross",
            Pattern::Corners => "Corners",
            Pattern::Scan => "Scan",
            Pattern::Dna => "DNA",
            Pattern::Stagger => "Stagger",
            Pattern::Pinwheel => "Pinwheel",
            Pattern::Radar => "Radar",
            Pattern::Diamond => "Diamond",
            Pattern::Fibonacci => "Fibonacci Spiral",
            Pattern::WaveInterference => "Wave Interference",
            Pattern::GravityWells => "Gravity Wells",
            Pattern::Kaleidoscope => "Kaleidoscope",
            Pattern::PerlinFlow => "Perlin Flow",
            Pattern::Quantum => "Quantum",
        }
    }

    pub fn func(self) -> PatternFn {
        match self {
            Pattern::Pulse => pulse,
            Pattern::Wave => wave,
            Pattern::WaveDiagonal => wave_diagonal,
            Pattern::Ripple => ripple,
            Pattern::Snake => snake,
            Pattern::Cascade => cascade,
            Pattern::Checkerboard => checkerboard,
            Pattern::Rain => rain,
            Pattern::Heartbeat => heartbeat,
            Pattern::Orbit => orbit,
            Pattern::Cross => cross,
            Pattern::Corners => corners,
            Pattern::Scan => scan,
            Pattern::Dna => dna,
            Pattern::Stagger => stagger,
            Pattern::Pinwheel => pinwheel,
            Pattern::Radar => radar,
            Pattern::Diamond => diamond,
            Pattern::Fibonacci => fibonacci,
            Pattern::WaveInterference => wave_interference,
            Pattern::GravityWells => gravity_wells,
            Pattern::Kaleidoscope => kaleidoscope,
            Pattern::PerlinFlow => perlin_flow,
            Pattern::Quantum => quantum,
        }
    }

    /// Target for the dot at `(row, col)`. Coordinates past the edge are
    /// clamped onto the grid.
    #[inline]
    pub fn sample(self, row: usize, col: usize, size: GridSize, time: f64) -> PatternResult {
        let last = size.side() - 1;
        (self.func())(row.min(last), col.min(last), size.side(), time)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = CraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| CraftError::UnknownPattern(s.to_owned()))
    }
}
