//! Onboarding flow: a rotating multilingual greeting that turns into a name
//! form on click, flips to a thank-you card on submit, and then resets.
//!
//! All timing is driven by the caller through `now` (milliseconds, the
//! `performance.now()` timebase), so the flow can be stepped in tests.

use crate::easing::{lerp, EASE_IN_OUT_CUBIC, STANDARD};
use crate::error::CraftError;

pub const GREETINGS: [&str; 11] = [
    "hello",
    "hóla",
    "salut",
    "hallo",
    "bonjour",
    "ciao",
    "olá",
    "merhaba",
    "こんにちは",
    "안녕하세요",
    "你好",
];

pub const HOVER_HINT: &str = "Click to introduce yourself";

/// How long a fully entered word stays before rotating, ms.
pub const DISPLAY_MS: f64 = 3000.0;
/// Delay between submit and the flow reporting completion, ms.
pub const COMPLETE_DELAY_MS: f64 = 1500.0;
/// Delay between completion and the greeting coming back, ms.
pub const RESET_DELAY_MS: f64 = 2000.0;
/// Card flip duration, ms.
pub const FLIP_MS: f64 = 1200.0;

const ENTER_DELAY: f64 = 0.4;
const ENTER_DURATION: f64 = 0.5;
const EXIT_DURATION: f64 = 0.4;
const STAGGER: f64 = 0.1;
const TRAVEL_PX: f64 = 80.0;

pub fn letters(word: &str) -> Vec<char> {
    word.chars().collect()
}

/// Time until the last letter of an `n`-letter word has landed, ms.
pub fn entrance_ms(n: usize) -> f64 {
    ((ENTER_DELAY + n.saturating_sub(1) as f64 * STAGGER + ENTER_DURATION) * 1000.0).round()
}

/// Time for an `n`-letter word to leave, ms. The last letter leaves first;
/// the word itself holds one stagger step longer than its first letter.
pub fn exit_ms(n: usize) -> f64 {
    ((n as f64 * STAGGER + EXIT_DURATION) * 1000.0).round()
}

/// Delay before rotating away from greeting `index`, ms.
pub fn rotation_delay_ms(index: usize) -> f64 {
    entrance_ms(GREETINGS[index].chars().count()) + DISPLAY_MS
}

/// Visual state of one greeting letter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterFrame {
    pub opacity: f64,
    /// Vertical offset in px; positive is below the baseline.
    pub y: f64,
    pub scale: f64,
}

impl LetterFrame {
    pub const HIDDEN: LetterFrame = LetterFrame {
        opacity: 0.0,
        y: TRAVEL_PX,
        scale: 0.5,
    };

    pub const SHOWN: LetterFrame = LetterFrame {
        opacity: 1.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Letter `i` rising into place, `elapsed` seconds after the word appeared.
    pub fn entering(i: usize, elapsed: f64) -> Self {
        let k = EASE_IN_OUT_CUBIC.progress(elapsed, ENTER_DELAY + i as f64 * STAGGER, ENTER_DURATION);
        LetterFrame {
            opacity: k,
            y: lerp(TRAVEL_PX, 0.0, k),
            scale: lerp(0.5, 1.0, k),
        }
    }

    /// Letter `i` of `n` floating away, `elapsed` seconds into the exit.
    pub fn leaving(i: usize, n: usize, elapsed: f64) -> Self {
        let delay = n.saturating_sub(1 + i) as f64 * STAGGER;
        let k = EASE_IN_OUT_CUBIC.progress(elapsed, delay, EXIT_DURATION);
        LetterFrame {
            opacity: 1.0 - k,
            y: lerp(0.0, -TRAVEL_PX, k),
            scale: lerp(1.0, 0.5, k),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Cycling through greetings.
    Greeting,
    /// Name form is showing.
    Form,
    /// Card flipped to the thank-you side.
    Submitted {
        name: String,
        at: f64,
        /// Set once the completion callback has fired.
        completed_at: Option<f64>,
    },
}

/// A greeting on its way out while the next one waits.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Outgoing {
    index: usize,
    since: f64,
}

#[derive(Debug, Clone)]
pub struct OnboardFlow {
    index: usize,
    hovered: bool,
    phase: Phase,
    /// When the current greeting's entrance begins.
    word_start: f64,
    outgoing: Option<Outgoing>,
    /// Pending rotation; `None` while paused.
    rotate_at: Option<f64>,
}

impl OnboardFlow {
    pub fn new(now: f64) -> Self {
        OnboardFlow {
            index: 0,
            hovered: false,
            phase: Phase::Greeting,
            word_start: now,
            outgoing: None,
            rotate_at: Some(now + rotation_delay_ms(0)),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn greeting(&self) -> &'static str {
        GREETINGS[self.index]
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// The hover hint is visible.
    pub fn shows_hint(&self) -> bool {
        self.hovered && self.phase == Phase::Greeting
    }

    pub fn set_hovered(&mut self, hovered: bool, now: f64) {
        if self.phase != Phase::Greeting || self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        self.rotate_at = if hovered {
            None
        } else {
            Some(now + rotation_delay_ms(self.index))
        };
    }

    /// Click on the greeting. Returns `true` if the form opened.
    pub fn click(&mut self) -> bool {
        if self.phase != Phase::Greeting {
            return false;
        }
        self.rotate_at = None;
        self.hovered = false;
        self.phase = Phase::Form;
        true
    }

    pub fn submit(&mut self, name: &str, now: f64) -> Result<(), CraftError> {
        if self.phase != Phase::Form {
            return Ok(());
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(CraftError::EmptyName);
        }
        log::info!("name submitted: {name}");
        self.phase = Phase::Submitted {
            name: name.to_owned(),
            at: now,
            completed_at: None,
        };
        Ok(())
    }

    /// Advance timers. Returns `true` if anything visible changed state.
    pub fn tick(&mut self, now: f64) -> bool {
        let mut changed = false;

        if let Some(out) = self.outgoing {
            if now >= out.since + exit_ms(GREETINGS[out.index].chars().count()) {
                self.outgoing = None;
                changed = true;
            }
        }

        match self.phase {
            Phase::Greeting => {
                if self.rotate_at.is_some_and(|due| now >= due) {
                    self.rotate(now);
                    changed = true;
                }
            }
            Phase::Form => {}
            Phase::Submitted { at, completed_at: None, .. } => {
                if now >= at + COMPLETE_DELAY_MS {
                    if let Phase::Submitted { completed_at, .. } = &mut self.phase {
                        *completed_at = Some(now);
                    }
                    changed = true;
                }
            }
            Phase::Submitted { completed_at: Some(done), .. } => {
                if now >= done + RESET_DELAY_MS {
                    self.reset(now);
                    changed = true;
                }
            }
        }
        changed
    }

    fn reset(&mut self, now: f64) {
        self.phase = Phase::Greeting;
        self.hovered = false;
        self.word_start = now;
        self.outgoing = None;
        self.rotate_at = Some(now + rotation_delay_ms(self.index));
    }

    fn rotate(&mut self, now: f64) {
        let old = self.index;
        self.index = (old + 1) % GREETINGS.len();
        self.outgoing = Some(Outgoing { index: old, since: now });
        self.word_start = now + exit_ms(GREETINGS[old].chars().count());
        self.rotate_at = Some(now + rotation_delay_ms(self.index));
        log::debug!("greeting -> {}", GREETINGS[self.index]);
    }

    /// Greeting index currently on screen: the outgoing word while it
    /// leaves, the current word otherwise.
    pub fn visible_index(&self) -> usize {
        self.outgoing.map_or(self.index, |out| out.index)
    }

    /// Letters of the visible greeting with their frame at `now`.
    pub fn letter_frames(&self, now: f64) -> Vec<(char, LetterFrame)> {
        if let Some(out) = self.outgoing {
            let word = letters(GREETINGS[out.index]);
            let elapsed = (now - out.since) / 1000.0;
            let n = word.len();
            return word
                .into_iter()
                .enumerate()
                .map(|(i, ch)| (ch, LetterFrame::leaving(i, n, elapsed)))
                .collect();
        }
        let elapsed = (now - self.word_start) / 1000.0;
        letters(self.greeting())
            .into_iter()
            .enumerate()
            .map(|(i, ch)| (ch, LetterFrame::entering(i, elapsed)))
            .collect()
    }

    /// Card rotation around Y in degrees: 0 shows the form, 180 the thanks.
    pub fn flip_degrees(&self, now: f64) -> f64 {
        match &self.phase {
            Phase::Submitted { at, .. } => 180.0 * STANDARD.progress(now - at, 0.0, FLIP_MS),
            _ => 0.0,
        }
    }

    /// Back side of the card, once submitted.
    pub fn thanks(&self) -> Option<String> {
        match &self.phase {
            Phase::Submitted { name, .. } => Some(format!("Nice to meet you, {name}!")),
            _ => None,
        }
    }
}
