use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

use super::dom;
use crate::gradients::{GradientDefinition, GRADIENTS};
use crate::palette::{self, ScrollingPalette, CAPTION_FADE, CAPTION_SHIFT_PX, SWATCH_FADE};

struct PaletteView {
    state: ScrollingPalette,
    items: Vec<HtmlElement>,
    /// Two stacked swatch layers; the front one fades in over the other.
    layers: [HtmlElement; 2],
    front: usize,
    /// Same arrangement for the description line.
    captions: [HtmlElement; 2],
    caption_front: usize,
}

impl PaletteView {
    fn show(&mut self, gradient: &GradientDefinition) -> Result<(), JsValue> {
        let back = self.front;
        self.front = 1 - self.front;
        let front = &self.layers[self.front];
        front.style().set_property("background", gradient.background)?;
        front.style().set_property("opacity", "1")?;
        self.layers[back].style().set_property("opacity", "0")?;
        self.show_caption(gradient.description)
    }

    fn show_caption(&mut self, text: &str) -> Result<(), JsValue> {
        let back = self.caption_front;
        self.caption_front = 1 - self.caption_front;
        let incoming = &self.captions[self.caption_front];

        let below = format!("translateY({CAPTION_SHIFT_PX}px)");
        let above = format!("translateY(-{CAPTION_SHIFT_PX}px)");
        let fade = caption_transition();
        dom::style(incoming, &[("transition", "none"), ("opacity", "0"), ("transform", below.as_str())])?;
        incoming.set_text_content(Some(text));
        // Flush the start state so the transition runs from it.
        let _ = incoming.offset_height();
        dom::style(
            incoming,
            &[("transition", fade.as_str()), ("opacity", "1"), ("transform", "translateY(0px)")],
        )?;
        dom::style(&self.captions[back], &[("opacity", "0"), ("transform", above.as_str())])
    }

    fn emphasize(&self) -> Result<(), JsValue> {
        let raw = self.state.raw_index();
        for (i, item) in self.items.iter().enumerate() {
            let style = item.style();
            style.set_property("transform", &format!("scale({:.4})", palette::item_scale(i, raw)))?;
            style.set_property("opacity", &format!("{:.4}", palette::item_opacity(i, raw)))?;
        }
        Ok(())
    }

    fn scrolled(&mut self, container: &HtmlElement) -> Result<(), JsValue> {
        let progress = palette::scroll_progress(
            f64::from(container.scroll_top()),
            f64::from(container.scroll_height()),
            f64::from(container.client_height()),
        );
        if let Some(index) = self.state.update(progress) {
            log::debug!("palette -> {}", GRADIENTS[index].id);
            self.show(&GRADIENTS[index])?;
        }
        self.emphasize()
    }
}

fn swatch_layer(document: &Document) -> Result<HtmlElement, JsValue> {
    let layer = dom::element(document, "div", "palette-swatch-layer")?;
    let fade = format!("opacity {SWATCH_FADE}s ease-out");
    dom::style(
        &layer,
        &[
            ("position", "absolute"),
            ("inset", "0"),
            ("background-size", "cover"),
            ("opacity", "0"),
            ("transition", fade.as_str()),
        ],
    )?;
    Ok(layer)
}

fn caption_transition() -> String {
    format!("opacity {CAPTION_FADE}s ease-out, transform {CAPTION_FADE}s ease-out")
}

fn caption_line(document: &Document) -> Result<HtmlElement, JsValue> {
    let line = dom::element(document, "p", "palette-caption-line")?;
    let fade = caption_transition();
    dom::style(
        &line,
        &[
            ("position", "absolute"),
            ("inset", "0"),
            ("margin", "0"),
            ("opacity", "0"),
            ("transition", fade.as_str()),
        ],
    )?;
    Ok(line)
}

/// Build the gradient list and preview into the scroll `container`.
pub fn mount(document: &Document, container: &HtmlElement) -> Result<(), JsValue> {
    dom::style(container, &[("height", "100vh"), ("overflow-y", "auto"), ("overscroll-behavior-y", "contain")])?;

    let stage = dom::element(document, "div", "palette-stage")?;
    dom::style(&stage, &[("position", "sticky"), ("top", "0"), ("height", "100vh")])?;

    let list = dom::element(document, "div", "palette-list")?;
    let mut items = Vec::with_capacity(GRADIENTS.len());
    for gradient in &GRADIENTS {
        let item = dom::text(document, "span", "palette-item", gradient.name)?;
        item.style().set_property("transform-origin", "left")?;
        list.append_child(&item)?;
        items.push(item);
    }

    let display = dom::element(document, "div", "palette-display")?;
    let swatch = dom::element(document, "div", "palette-swatch")?;
    let layers = [swatch_layer(document)?, swatch_layer(document)?];
    for layer in &layers {
        swatch.append_child(layer)?;
    }
    let caption = dom::element(document, "div", "palette-caption")?;
    dom::style(&caption, &[("position", "relative"), ("overflow", "hidden")])?;
    let captions = [caption_line(document)?, caption_line(document)?];
    for line in &captions {
        caption.append_child(line)?;
    }
    display.append_child(&swatch)?;
    display.append_child(&caption)?;

    stage.append_child(&display)?;
    stage.append_child(&list)?;
    container.append_child(&stage)?;

    let spacer = dom::element(document, "div", "palette-spacer")?;
    let spacer_height = format!("{}vh", palette::spacer_height_vh(GRADIENTS.len()));
    dom::style(&spacer, &[("height", spacer_height.as_str()), ("pointer-events", "none")])?;
    container.append_child(&spacer)?;

    let mut view = PaletteView {
        state: ScrollingPalette::new(GRADIENTS.len()),
        items,
        layers,
        front: 1,
        captions,
        caption_front: 1,
    };
    view.show(&GRADIENTS[0])?;
    view.emphasize()?;

    let view = Rc::new(RefCell::new(view));
    let scroller = container.clone();
    dom::listen(container, "scroll", move |_| {
        if let Err(err) = view.borrow_mut().scrolled(&scroller) {
            log::error!("palette update failed: {err:?}");
        }
    })?;

    log::info!("mounted palette with {} gradients", GRADIENTS.len());
    Ok(())
}
