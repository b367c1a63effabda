use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, HtmlElement, HtmlInputElement};

use super::render::AnimationLoop;
use super::{aurora, dom};
use crate::config::Settings;
use crate::error::CraftError;
use crate::onboard::{OnboardFlow, Phase, HOVER_HINT};

struct OnboardUi {
    flow: OnboardFlow,
    greeting: HtmlElement,
    word: HtmlElement,
    letters: Vec<HtmlElement>,
    /// Greeting index the letter spans were built for.
    built_for: Option<usize>,
    hint: HtmlElement,
    card: HtmlElement,
    flipper: HtmlElement,
    input: HtmlInputElement,
    thanks: HtmlElement,
    was_submitted: bool,
}

impl OnboardUi {
    fn rebuild_letters(&mut self, document: &Document, index: usize, chars: &[char]) -> Result<(), JsValue> {
        self.word.set_text_content(None);
        self.letters.clear();
        for ch in chars {
            let span = dom::text(document, "span", "onboard-letter", &ch.to_string())?;
            span.style().set_property("display", "inline-block")?;
            self.word.append_child(&span)?;
            self.letters.push(span);
        }
        self.built_for = Some(index);
        Ok(())
    }

    fn render(&mut self, document: &Document, now: f64) -> Result<(), JsValue> {
        self.flow.tick(now);

        match self.flow.phase().clone() {
            Phase::Greeting => {
                if self.was_submitted {
                    self.was_submitted = false;
                    self.input.set_value("");
                }
                dom::set_visible(&self.greeting, true)?;
                dom::set_visible(&self.card, false)?;
                dom::set_visible(&self.hint, self.flow.shows_hint())?;

                let frames = self.flow.letter_frames(now);
                let visible = self.flow.visible_index();
                if self.built_for != Some(visible) || self.letters.len() != frames.len() {
                    let chars: Vec<char> = frames.iter().map(|(ch, _)| *ch).collect();
                    self.rebuild_letters(document, visible, &chars)?;
                }
                for (span, (_, frame)) in self.letters.iter().zip(&frames) {
                    let style = span.style();
                    style.set_property("opacity", &format!("{:.3}", frame.opacity))?;
                    style.set_property(
                        "transform",
                        &format!("translateY({:.2}px) scale({:.3})", frame.y, frame.scale),
                    )?;
                }
            }
            Phase::Form => {
                dom::set_visible(&self.greeting, false)?;
                dom::set_visible(&self.card, true)?;
                self.flipper.style().set_property("transform", "rotateY(0deg)")?;
            }
            Phase::Submitted { .. } => {
                self.was_submitted = true;
                let degrees = self.flow.flip_degrees(now);
                self.flipper
                    .style()
                    .set_property("transform", &format!("rotateY({degrees:.2}deg)"))?;
                self.thanks.set_text_content(self.flow.thanks().as_deref());
            }
        }
        Ok(())
    }
}

struct NameCard {
    root: HtmlElement,
    flipper: HtmlElement,
    form: HtmlElement,
    input: HtmlInputElement,
    thanks: HtmlElement,
}

fn build_card(document: &Document) -> Result<NameCard, JsValue> {
    let card = dom::element(document, "div", "onboard-card")?;
    card.style().set_property("perspective", "1200px")?;

    let flipper = dom::element(document, "div", "onboard-flipper")?;
    dom::style(&flipper, &[("transform-style", "preserve-3d"), ("position", "relative")])?;

    let front = dom::element(document, "div", "onboard-face onboard-front")?;
    front.style().set_property("backface-visibility", "hidden")?;
    let form = dom::element(document, "form", "onboard-form")?;
    let input = document.create_element("input")?.dyn_into::<HtmlInputElement>()?;
    input.set_type("text");
    input.set_placeholder("How do I call you?");
    input.set_required(true);
    input.set_attribute("aria-label", "Name")?;
    input.set_class_name("onboard-input");
    let button = dom::text(document, "button", "onboard-submit", "Continue")?;
    button.set_attribute("type", "submit")?;
    form.append_child(&input)?;
    form.append_child(&button)?;
    front.append_child(&form)?;

    let back = dom::element(document, "div", "onboard-face onboard-back")?;
    dom::style(
        &back,
        &[
            ("backface-visibility", "hidden"),
            ("transform", "rotateY(180deg)"),
            ("position", "absolute"),
            ("top", "0"),
            ("left", "0"),
            ("right", "0"),
        ],
    )?;
    let thanks = dom::element(document, "div", "onboard-thanks")?;
    back.append_child(&thanks)?;

    flipper.append_child(&front)?;
    flipper.append_child(&back)?;
    card.append_child(&flipper)?;
    Ok(NameCard {
        root: card,
        flipper,
        form,
        input,
        thanks,
    })
}

/// Build the greeting, the name card and the aurora background into `container`.
pub fn mount(document: &Document, container: &HtmlElement, settings: &Settings) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(CraftError::Context("window"))?;
    let reduced_motion = settings.reduced_motion(dom::prefers_reduced_motion(&window));

    let canvas = document.create_element("canvas")?.dyn_into::<HtmlCanvasElement>()?;
    canvas.set_class_name("aurora");
    container.append_child(&canvas)?;
    aurora::start(canvas, reduced_motion)?;

    let greeting = dom::element(document, "div", "onboard-greeting")?;
    let word = dom::element(document, "div", "onboard-word")?;
    let hint = dom::text(document, "div", "onboard-hint", HOVER_HINT)?;
    greeting.append_child(&word)?;
    greeting.append_child(&hint)?;
    container.append_child(&greeting)?;

    let NameCard {
        root: card,
        flipper,
        form,
        input,
        thanks,
    } = build_card(document)?;
    dom::set_visible(&card, false)?;
    dom::set_visible(&hint, false)?;
    container.append_child(&card)?;

    let ui = Rc::new(RefCell::new(OnboardUi {
        flow: OnboardFlow::new(dom::now(&window)),
        greeting: greeting.clone(),
        word,
        letters: Vec::new(),
        built_for: None,
        hint,
        card,
        flipper,
        input,
        thanks,
        was_submitted: false,
    }));

    for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
        let ui = ui.clone();
        let window = window.clone();
        dom::listen(&greeting, event, move |_| {
            ui.borrow_mut().flow.set_hovered(hovered, dom::now(&window));
        })?;
    }

    {
        let ui = ui.clone();
        dom::listen(&greeting, "click", move |_| {
            let mut ui = ui.borrow_mut();
            if !ui.flow.click() {
                return;
            }
            // Swap in the form now so the input can take focus.
            let shown = dom::set_visible(&ui.greeting, false)
                .and_then(|_| dom::set_visible(&ui.card, true))
                .and_then(|_| ui.input.focus());
            if let Err(err) = shown {
                log::warn!("could not show name form: {err:?}");
            }
        })?;
    }

    {
        let ui = ui.clone();
        let window = window.clone();
        dom::listen(&form, "submit", move |event| {
            event.prevent_default();
            let mut ui = ui.borrow_mut();
            let name = ui.input.value();
            match ui.flow.submit(&name, dom::now(&window)) {
                // Fill the back face before the flip starts.
                Ok(()) => ui.thanks.set_text_content(ui.flow.thanks().as_deref()),
                Err(err) => log::warn!("{err}"),
            }
        })?;
    }

    let render_doc = document.clone();
    AnimationLoop::start(move |time| match ui.borrow_mut().render(&render_doc, time) {
        Ok(()) => true,
        Err(err) => {
            log::error!("onboard frame failed: {err:?}");
            false
        }
    })?
    .detach();

    log::info!("mounted onboarding (reduced motion: {reduced_motion})");
    Ok(())
}
