//! Scroll-driven gradient viewer. Maps the scroll container's progress to a
//! fractional index into [`GRADIENTS`](crate::gradients::GRADIENTS) and
//! derives per-item emphasis from it.

/// Scroll distance per gradient, in viewport heights.
pub const VH_PER_ITEM: f64 = 30.0;

/// Crossfade of the preview swatch, seconds.
pub const SWATCH_FADE: f64 = 0.15;

/// Slide/fade of the description line, seconds.
pub const CAPTION_FADE: f64 = 0.12;

/// A new description rises this far into place; the old one leaves upward.
pub const CAPTION_SHIFT_PX: f64 = 8.0;

/// Fraction of the scrollable range covered, in `[0, 1]`.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_top / range).clamp(0.0, 1.0)
}

/// Fractional index for `progress`; item `i` sits at `i / (count - 1)`.
pub fn scroll_index(progress: f64, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    progress.clamp(0.0, 1.0) * (count - 1) as f64
}

/// Nearest whole index, if it names an item.
pub fn active_index(raw: f64, count: usize) -> Option<usize> {
    let rounded = raw.round();
    if rounded >= 0.0 && rounded < count as f64 {
        Some(rounded as usize)
    } else {
        None
    }
}

/// Scale of list item `index` while the list sits at `raw`.
pub fn item_scale(index: usize, raw: f64) -> f64 {
    let d = index as f64 - raw;
    0.85 + (-d * d * 2.5).exp() * 0.15
}

/// Opacity of list item `index` while the list sits at `raw`.
pub fn item_opacity(index: usize, raw: f64) -> f64 {
    let d = index as f64 - raw;
    0.3 + (-d * d * 3.0).exp() * 0.7
}

/// Height of the spacer that gives the container its scroll range.
pub fn spacer_height_vh(count: usize) -> f64 {
    count.saturating_sub(1) as f64 * VH_PER_ITEM
}

/// Tracks which gradient is on display.
#[derive(Debug, Clone)]
pub struct ScrollingPalette {
    count: usize,
    active: usize,
    raw: f64,
}

impl ScrollingPalette {
    pub fn new(count: usize) -> Self {
        ScrollingPalette {
            count,
            active: 0,
            raw: 0.0,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Fractional index from the last update.
    pub fn raw_index(&self) -> f64 {
        self.raw
    }

    /// Feed a new scroll progress. Returns the new active index when it changed.
    pub fn update(&mut self, progress: f64) -> Option<usize> {
        self.raw = scroll_index(progress, self.count);
        match active_index(self.raw, self.count) {
            Some(next) if next != self.active => {
                self.active = next;
                Some(next)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_handles_unscrollable_containers() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(150.0, 1100.0, 800.0), 0.5);
        assert_eq!(scroll_progress(900.0, 1100.0, 800.0), 1.0);
    }

    #[test]
    fn index_mapping_is_linear_and_clamped() {
        assert_eq!(scroll_index(0.0, 10), 0.0);
        assert_eq!(scroll_index(1.0, 10), 9.0);
        assert_eq!(scroll_index(0.5, 3), 1.0);
        assert_eq!(scroll_index(1.7, 10), 9.0);
        assert_eq!(scroll_index(0.4, 1), 0.0);
        assert_eq!(active_index(2.49, 10), Some(2));
        assert_eq!(active_index(2.5, 10), Some(3));
        assert_eq!(active_index(9.6, 10), None);
    }

    #[test]
    fn emphasis_peaks_on_the_current_item() {
        assert!((item_scale(3, 3.0) - 1.0).abs() < 1e-12);
        assert!((item_opacity(3, 3.0) - 1.0).abs() < 1e-12);
        assert!(item_scale(0, 3.0) < 0.851);
        assert!(item_opacity(0, 3.0) < 0.301);
        assert_eq!(item_opacity(2, 2.5), item_opacity(3, 2.5));
    }

    #[test]
    fn update_reports_only_changes() {
        let mut palette = ScrollingPalette::new(10);
        assert_eq!(palette.update(0.01), None);
        assert_eq!(palette.update(0.5), Some(5));
        assert_eq!(palette.raw_index(), 4.5);
        assert_eq!(palette.update(0.52), None);
        assert_eq!(palette.update(1.0), Some(9));
        assert_eq!(palette.active(), 9);
        assert_eq!(spacer_height_vh(10), 270.0);
    }
}
