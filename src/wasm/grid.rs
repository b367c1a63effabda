use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

use super::dom;
use super::render::AnimationLoop;
use crate::config::{PlayMode, Settings};
use crate::error::CraftError;
use crate::grid::{is_animating, DotGrid, DotState, Showcase, SHOWCASES};

struct Card {
    grid: DotGrid,
    dots: Vec<HtmlElement>,
    hovered: bool,
    /// Dots currently differ from idle.
    active: bool,
}

struct GridPage {
    cards: Vec<Card>,
    play_mode: PlayMode,
    reduced_motion: bool,
}

fn paint(dot: &HtmlElement, state: &DotState) -> Result<(), JsValue> {
    let style = dot.style();
    style.set_property("opacity", &format!("{:.3}", state.opacity))?;
    style.set_property("transform", &format!("scale({:.3})", state.scale))
}

impl Card {
    fn build(document: &Document, showcase: &Showcase, settings: &Settings) -> Result<(HtmlElement, Card), JsValue> {
        let size = showcase.size;
        let article = dom::element(document, "article", "grid-card")?;
        article.set_attribute("data-pattern", showcase.pattern.name())?;

        let holder = dom::element(document, "div", "grid-card-body")?;
        let grid_el = dom::element(document, "div", "dot-grid")?;
        let extent = format!("{}px", size.extent_px());
        let columns = format!("repeat({}, {}px)", size.side(), size.dot_px());
        let gap = format!("{}px", size.gap_px());
        dom::style(
            &grid_el,
            &[
                ("display", "grid"),
                ("grid-template-columns", columns.as_str()),
                ("gap", gap.as_str()),
                ("width", extent.as_str()),
                ("height", extent.as_str()),
            ],
        )?;

        let dot_px = format!("{}px", size.dot_px());
        let mut dots = Vec::with_capacity(size.dot_count());
        for _ in 0..size.dot_count() {
            let dot = dom::element(document, "div", "dot")?;
            dom::style(
                &dot,
                &[
                    ("width", dot_px.as_str()),
                    ("height", dot_px.as_str()),
                    ("border-radius", "50%"),
                    ("background-color", "var(--color-dot)"),
                    ("will-change", "transform, opacity"),
                ],
            )?;
            paint(&dot, &DotState::IDLE)?;
            grid_el.append_child(&dot)?;
            dots.push(dot);
        }

        holder.append_child(&grid_el)?;
        article.append_child(&holder)?;
        article.append_child(&dom::text(document, "span", "grid-card-label", showcase.label())?)?;

        let card = Card {
            grid: DotGrid::with_settings(size, showcase.pattern, settings),
            dots,
            hovered: false,
            active: false,
        };
        Ok((article, card))
    }

    fn frame(&mut self, time: f64, play_mode: PlayMode, reduced_motion: bool) -> Result<(), JsValue> {
        if is_animating(self.hovered, play_mode, reduced_motion) {
            self.active = true;
            let states = self.grid.tick(time);
            for (dot, state) in self.dots.iter().zip(states) {
                paint(dot, state)?;
            }
        } else if self.active {
            self.active = false;
            self.grid.set_idle();
            for dot in &self.dots {
                paint(dot, &DotState::IDLE)?;
            }
        }
        Ok(())
    }
}

fn build_toggle(document: &Document, mode: PlayMode) -> Result<(HtmlElement, HtmlElement), JsValue> {
    let wrap = dom::element(document, "div", "play-mode")?;
    wrap.append_child(&dom::text(document, "span", "play-mode-label", "On hover")?)?;
    let switch = dom::element(document, "button", "play-mode-switch")?;
    switch.set_attribute("type", "button")?;
    switch.set_attribute("role", "switch")?;
    switch.set_attribute("aria-checked", if mode == PlayMode::All { "true" } else { "false" })?;
    switch.append_child(&dom::element(document, "span", "play-mode-thumb")?)?;
    wrap.append_child(&switch)?;
    wrap.append_child(&dom::text(document, "span", "play-mode-label", "Play all")?)?;
    Ok((wrap, switch))
}

/// Build every showcase card into `container` and start the shared frame loop.
pub fn mount(document: &Document, container: &HtmlElement, settings: &Settings) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(CraftError::Context("window"))?;
    let reduced_motion = settings.reduced_motion(dom::prefers_reduced_motion(&window));

    let (toggle, switch) = build_toggle(document, settings.play_mode)?;
    container.append_child(&toggle)?;

    let list = dom::element(document, "div", "grid-cards")?;
    container.append_child(&list)?;

    let page = Rc::new(RefCell::new(GridPage {
        cards: Vec::with_capacity(SHOWCASES.len()),
        play_mode: settings.play_mode,
        reduced_motion,
    }));

    for (index, showcase) in SHOWCASES.iter().enumerate() {
        let (article, card) = Card::build(document, showcase, settings)?;
        list.append_child(&article)?;
        page.borrow_mut().cards.push(card);

        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let page = page.clone();
            dom::listen(&article, event, move |_| {
                if let Some(card) = page.borrow_mut().cards.get_mut(index) {
                    card.hovered = hovered;
                }
            })?;
        }
    }

    {
        let page = page.clone();
        let switch_el = switch.clone();
        dom::listen(&switch, "click", move |_| {
            let mut page = page.borrow_mut();
            page.play_mode = page.play_mode.toggle();
            let checked = if page.play_mode == PlayMode::All { "true" } else { "false" };
            if let Err(err) = switch_el.set_attribute("aria-checked", checked) {
                log::warn!("could not update play-mode switch: {err:?}");
            }
            log::debug!("play mode -> {:?}", page.play_mode);
        })?;
    }

    let frame_page = page.clone();
    let frames = AnimationLoop::start(move |time| {
        let mut page = frame_page.borrow_mut();
        let (play_mode, reduced_motion) = (page.play_mode, page.reduced_motion);
        for card in page.cards.iter_mut() {
            if let Err(err) = card.frame(time, play_mode, reduced_motion) {
                log::error!("dot grid frame failed: {err:?}");
                return false;
            }
        }
        true
    })?;
    let running = frames.is_running();
    frames.detach();

    log::info!(
        "mounted {} dot grids (reduced motion: {reduced_motion}, running: {running})",
        SHOWCASES.len()
    );
    Ok(())
}
