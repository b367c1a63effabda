//! Page configuration: which showcase to mount (`<body data-view>`) and
//! runtime knobs from the URL query string.

use std::str::FromStr;

use log::LevelFilter;

use crate::error::CraftError;
use crate::grid::{ANIMATION_SPEED, SMOOTHING};
use crate::logging;

/// Showcase mounted by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Grid,
    Onboard,
    Palette,
}

impl FromStr for View {
    type Err = CraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "home" => Ok(View::Home),
            "grid" => Ok(View::Grid),
            "onboard" => Ok(View::Onboard),
            "palette" | "scrolling-palette" => Ok(View::Palette),
            other => Err(CraftError::UnknownView(other.to_owned())),
        }
    }
}

/// Whether dot grids animate only while hovered or all at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayMode {
    #[default]
    Hover,
    All,
}

impl PlayMode {
    pub fn toggle(self) -> Self {
        match self {
            PlayMode::Hover => PlayMode::All,
            PlayMode::All => PlayMode::Hover,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub play_mode: PlayMode,
    /// Multiplier from wall-clock seconds to pattern time.
    pub speed: f64,
    pub smoothing: f64,
    /// `Some` overrides the `prefers-reduced-motion` media query.
    pub reduced_motion: Option<bool>,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            play_mode: PlayMode::Hover,
            speed: ANIMATION_SPEED,
            smoothing: SMOOTHING,
            reduced_motion: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Settings {
    /// Parse `location.search`, e.g. `?play=all&speed=0.8`.
    pub fn from_query(query: &str) -> Result<Settings, CraftError> {
        let mut settings = Settings::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "play" => {
                    settings.play_mode = match value {
                        "hover" => PlayMode::Hover,
                        "all" => PlayMode::All,
                        _ => return Err(CraftError::setting(key, value)),
                    }
                }
                "speed" => {
                    settings.speed = parse_positive(key, value)?;
                }
                "smoothing" => {
                    let v = parse_positive(key, value)?;
                    if v > 1.0 {
                        return Err(CraftError::setting(key, value));
                    }
                    settings.smoothing = v;
                }
                "motion" => {
                    settings.reduced_motion = match value {
                        "reduce" => Some(true),
                        "full" => Some(false),
                        _ => return Err(CraftError::setting(key, value)),
                    }
                }
                "log" => {
                    settings.log_level =
                        logging::parse_level(value).ok_or_else(|| CraftError::setting(key, value))?;
                }
                _ => log::warn!("ignoring unknown setting {key:?}"),
            }
        }
        Ok(settings)
    }

    /// Parse `query` with warnings already reaching the logger, then apply
    /// the `log` level it asks for.
    pub fn load(query: &str) -> Result<Settings, CraftError> {
        logging::init(LevelFilter::Info);
        let settings = Settings::from_query(query)?;
        logging::init(settings.log_level);
        Ok(settings)
    }

    /// Resolve reduced motion against what the browser reports.
    pub fn reduced_motion(&self, prefers_reduced: bool) -> bool {
        self.reduced_motion.unwrap_or(prefers_reduced)
    }
}

fn parse_positive(key: &str, value: &str) -> Result<f64, CraftError> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(CraftError::setting(key, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_gives_defaults() {
        assert_eq!(Settings::from_query("").unwrap(), Settings::default());
        assert_eq!(Settings::from_query("?").unwrap(), Settings::default());
    }

    #[test]
    fn parses_every_key() {
        let s = Settings::from_query("?play=all&speed=1.2&smoothing=0.5&motion=reduce&log=debug").unwrap();
        assert_eq!(s.play_mode, PlayMode::All);
        assert_eq!(s.speed, 1.2);
        assert_eq!(s.smoothing, 0.5);
        assert_eq!(s.reduced_motion, Some(true));
        assert_eq!(s.log_level, LevelFilter::Debug);
        assert!(s.reduced_motion(false));
    }

    #[test]
    fn rejects_malformed_values() {
        for q in ["play=sometimes", "speed=-1", "speed=fast", "smoothing=2", "motion=", "log=shout"] {
            assert!(
                matches!(Settings::from_query(q), Err(CraftError::InvalidSetting { .. })),
                "{q}"
            );
        }
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let s = Settings::from_query("utm_source=newsletter&play=all").unwrap();
        assert_eq!(s.play_mode, PlayMode::All);
    }

    #[test]
    fn views() {
        assert_eq!("".parse::<View>().unwrap(), View::Home);
        assert_eq!("scrolling-palette".parse::<View>().unwrap(), View::Palette);
        assert!("blog".parse::<View>().is_err());
        assert_eq!(PlayMode::Hover.toggle(), PlayMode::All);
        assert!(Settings::default().reduced_motion(true));
    }
}
