//! Dot-grid animator: samples a [`Pattern`] per dot and eases every dot
//! towards the sampled target.

use crate::config::{PlayMode, Settings};
use crate::error::CraftError;
use crate::patterns::Pattern;

pub const IDLE_OPACITY: f64 = 0.25;
pub const IDLE_SCALE: f64 = 0.7;
pub const SMOOTHING: f64 = 0.12;
pub const ANIMATION_SPEED: f64 = 0.6;

/// Supported grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridSize {
    Three,
    Five,
    Nine,
}

impl GridSize {
    /// Dots per side.
    pub fn side(self) -> usize {
        match self {
            GridSize::Three => 3,
            GridSize::Five => 5,
            GridSize::Nine => 9,
        }
    }

    pub fn dot_count(self) -> usize {
        self.side() * self.side()
    }

    /// Dot diameter in CSS pixels. Denser grids use smaller dots.
    pub fn dot_px(self) -> f64 {
        match self {
            GridSize::Three => 8.0,
            GridSize::Five => 7.0,
            GridSize::Nine => 5.0,
        }
    }

    pub fn gap_px(self) -> f64 {
        match self {
            GridSize::Three => 4.0,
            GridSize::Five | GridSize::Nine => 3.0,
        }
    }

    /// Width (and height) of the whole grid in CSS pixels.
    pub fn extent_px(self) -> f64 {
        let n = self.side() as f64;
        n * self.dot_px() + (n - 1.0) * self.gap_px()
    }
}

impl TryFrom<usize> for GridSize {
    type Error = CraftError;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        match side {
            3 => Ok(GridSize::Three),
            5 => Ok(GridSize::Five),
            9 => Ok(GridSize::Nine),
            other => Err(CraftError::GridSize(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotState {
    pub opacity: f64,
    pub scale: f64,
}

impl DotState {
    pub const IDLE: DotState = DotState {
        opacity: IDLE_OPACITY,
        scale: IDLE_SCALE,
    };
}

impl Default for DotState {
    fn default() -> Self {
        DotState::IDLE
    }
}

/// Whether a grid should be animating this frame.
pub fn is_animating(hovered: bool, play_mode: PlayMode, reduced_motion: bool) -> bool {
    !reduced_motion && (hovered || play_mode == PlayMode::All)
}

#[derive(Debug, Clone)]
pub struct DotGrid {
    size: GridSize,
    pattern: Pattern,
    speed: f64,
    smoothing: f64,
    dots: Vec<DotState>,
}

impl DotGrid {
    pub fn new(size: GridSize, pattern: Pattern) -> Self {
        DotGrid {
            size,
            pattern,
            speed: ANIMATION_SPEED,
            smoothing: SMOOTHING,
            dots: vec![DotState::IDLE; size.dot_count()],
        }
    }

    pub fn with_settings(size: GridSize, pattern: Pattern, settings: &Settings) -> Self {
        DotGrid {
            speed: settings.speed,
            smoothing: settings.smoothing,
            ..DotGrid::new(size, pattern)
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn dots(&self) -> &[DotState] {
        &self.dots
    }

    /// `(row, col)` of the dot at `index` in row-major order.
    pub fn coordinates(&self, index: usize) -> (usize, usize) {
        let side = self.size.side();
        (index / side, index % side)
    }

    /// Snap every dot back to its resting state.
    pub fn set_idle(&mut self) {
        self.dots.fill(DotState::IDLE);
    }

    /// Advance one frame. `time_ms` is the animation-frame timestamp.
    pub fn tick(&mut self, time_ms: f64) -> &[DotState] {
        let t = time_ms / 1000.0 * self.speed;
        let side = self.size.side();
        let k = self.smoothing;
        for (i, dot) in self.dots.iter_mut().enumerate() {
            let target = self.pattern.sample(i / side, i % side, self.size, t);
            dot.opacity += (target.opacity - dot.opacity) * k;
            dot.scale += (target.scale - dot.scale) * k;
        }
        &self.dots
    }
}

/// One card on the grid page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showcase {
    pub size: GridSize,
    pub pattern: Pattern,
}

impl Showcase {
    const fn new(size: GridSize, pattern: Pattern) -> Self {
        Showcase { size, pattern }
    }

    pub fn label(&self) -> &'static str {
        self.pattern.label()
    }
}

pub const SHOWCASES: [Showcase; 24] = [
    Showcase::new(GridSize::Three, Pattern::Pulse),
    Showcase::new(GridSize::Three, Pattern::Checkerboard),
    Showcase::new(GridSize::Three, Pattern::Stagger),
    Showcase::new(GridSize::Three, Pattern::Fibonacci),
    Showcase::new(GridSize::Three, Pattern::WaveInterference),
    Showcase::new(GridSize::Three, Pattern::GravityWells),
    Showcase::new(GridSize::Three, Pattern::Kaleidoscope),
    Showcase::new(GridSize::Three, Pattern::Quantum),
    Showcase::new(GridSize::Five, Pattern::Wave),
    Showcase::new(GridSize::Five, Pattern::Ripple),
    Showcase::new(GridSize::Five, Pattern::Snake),
    Showcase::new(GridSize::Five, Pattern::Heartbeat),
    Showcase::new(GridSize::Five, Pattern::Cross),
    Showcase::new(GridSize::Five, Pattern::Diamond),
    Showcase::new(GridSize::Five, Pattern::Radar),
    Showcase::new(GridSize::Nine, Pattern::Cascade),
    Showcase::new(GridSize::Nine, Pattern::WaveDiagonal),
    Showcase::new(GridSize::Nine, Pattern::Rain),
    Showcase::new(GridSize::Nine, Pattern::Orbit),
    Showcase::new(GridSize::Nine, Pattern::Corners),
    Showcase::new(GridSize::Nine, Pattern::Scan),
    Showcase::new(GridSize::Nine, Pattern::Dna),
    Showcase::new(GridSize::Nine, Pattern::Pinwheel),
    Showcase::new(GridSize::Nine, Pattern::PerlinFlow),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sizes() {
        assert_eq!(GridSize::try_from(5).unwrap(), GridSize::Five);
        assert!(matches!(GridSize::try_from(4), Err(CraftError::GridSize(4))));
        assert_eq!(GridSize::Three.extent_px(), 3.0 * 8.0 + 2.0 * 4.0);
        assert_eq!(GridSize::Nine.extent_px(), 9.0 * 5.0 + 8.0 * 3.0);
        assert_eq!(GridSize::Nine.dot_count(), 81);
    }

    #[test]
    fn starts_idle_and_row_major() {
        let grid = DotGrid::new(GridSize::Five, Pattern::Wave);
        assert_eq!(grid.dots().len(), 25);
        assert!(grid.dots().iter().all(|d| *d == DotState::IDLE));
        assert_eq!(grid.coordinates(0), (0, 0));
        assert_eq!(grid.coordinates(7), (1, 2));
        assert_eq!(grid.coordinates(24), (4, 4));
    }

    #[test]
    fn tick_moves_a_fixed_fraction_towards_target() {
        let mut grid = DotGrid::new(GridSize::Three, Pattern::Pulse);
        // t = 0 -> pulse target opacity 0.65, scale 0.8
        let dots = grid.tick(0.0);
        let expected_opacity = IDLE_OPACITY + (0.65 - IDLE_OPACITY) * SMOOTHING;
        let expected_scale = IDLE_SCALE + (0.8 - IDLE_SCALE) * SMOOTHING;
        for d in dots {
            assert!((d.opacity - expected_opacity).abs() < 1e-12);
            assert!((d.scale - expected_scale).abs() < 1e-12);
        }
    }

    #[test]
    fn set_idle_resets_after_animation() {
        let mut grid = DotGrid::new(GridSize::Nine, Pattern::Rain);
        for frame in 0..30 {
            grid.tick(frame as f64 * 16.0);
        }
        assert!(grid.dots().iter().any(|d| *d != DotState::IDLE));
        grid.set_idle();
        assert!(grid.dots().iter().all(|d| *d == DotState::IDLE));
    }

    #[test]
    fn settings_override_speed_and_smoothing() {
        let settings = Settings {
            smoothing: 1.0,
            ..Settings::default()
        };
        let mut grid = DotGrid::with_settings(GridSize::Three, Pattern::Pulse, &settings);
        let dots = grid.tick(0.0);
        assert!((dots[0].opacity - 0.65).abs() < 1e-12);
    }

    #[test]
    fn activity_rule() {
        assert!(is_animating(true, PlayMode::Hover, false));
        assert!(is_animating(false, PlayMode::All, false));
        assert!(!is_animating(false, PlayMode::Hover, false));
        assert!(!is_animating(true, PlayMode::All, true));
    }

    #[test]
    fn showcases_cover_the_registry_once() {
        let seen: HashSet<Pattern> = SHOWCASES.iter().map(|s| s.pattern).collect();
        assert_eq!(seen.len(), SHOWCASES.len());
        assert_eq!(seen, Pattern::ALL.into_iter().collect());
        let counts = [GridSize::Three, GridSize::Five, GridSize::Nine]
            .map(|size| SHOWCASES.iter().filter(|s| s.size == size).count());
        assert_eq!(counts, [8, 7, 9]);
        assert_eq!(SHOWCASES[3].label(), "Fibonacci Spiral");
    }
}
