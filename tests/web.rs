#![cfg(target_arch = "wasm32")]

use craft_wasm::gradients::GRADIENTS;
use craft_wasm::grid::SHOWCASES;
use craft_wasm::wasm::{dom, grid, onboard, palette, render};
use craft_wasm::Settings;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_container() -> (web_sys::Document, web_sys::HtmlElement) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let container = dom::element(&document, "div", "").unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    (document, container)
}

fn by_class<T: JsCast>(container: &web_sys::HtmlElement, class: &str) -> T {
    container
        .get_elements_by_class_name(class)
        .item(0)
        .unwrap()
        .dyn_into::<T>()
        .unwrap()
}

fn is_shown(el: &web_sys::HtmlElement) -> bool {
    el.style().get_property_value("display").unwrap() != "none"
}

#[wasm_bindgen_test]
fn grid_mounts_one_dot_per_cell() {
    let (document, container) = fresh_container();
    grid::mount(&document, &container, &Settings::default()).unwrap();

    let cards = container.get_elements_by_class_name("grid-card");
    assert_eq!(cards.length() as usize, SHOWCASES.len());

    let expected: usize = SHOWCASES.iter().map(|s| s.size.dot_count()).sum();
    let dots = container.get_elements_by_class_name("dot");
    assert_eq!(dots.length() as usize, expected);

    let first = dots
        .item(0)
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    assert_eq!(first.style().get_property_value("opacity").unwrap(), "0.25");
    assert_eq!(first.style().get_property_value("transform").unwrap(), "scale(0.7)");
}

#[wasm_bindgen_test]
fn grid_card_is_sized_for_its_dots() {
    let (document, container) = fresh_container();
    grid::mount(&document, &container, &Settings::default()).unwrap();

    let grid_el = container
        .get_elements_by_class_name("dot-grid")
        .item(0)
        .unwrap();
    let rect = grid_el.get_bounding_client_rect();
    // 3x3: 3*8 + 2*4
    assert_eq!(rect.width(), 32.0);
    assert_eq!(rect.height(), 32.0);
}

#[wasm_bindgen_test]
fn palette_lists_every_gradient() {
    let (document, container) = fresh_container();
    palette::mount(&document, &container).unwrap();

    let items = container.get_elements_by_class_name("palette-item");
    assert_eq!(items.length() as usize, GRADIENTS.len());
    assert_eq!(items.item(0).unwrap().text_content().unwrap(), "Linear");

    let lines = container.get_elements_by_class_name("palette-caption-line");
    assert_eq!(lines.length(), 2);
    let lines: Vec<web_sys::HtmlElement> = (0..2)
        .map(|i| lines.item(i).unwrap().dyn_into().unwrap())
        .collect();
    let shown: Vec<_> = lines
        .iter()
        .filter(|line| line.style().get_property_value("opacity").unwrap() == "1")
        .collect();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].text_content().unwrap(), GRADIENTS[0].description);
    assert_eq!(shown[0].style().get_property_value("transform").unwrap(), "translateY(0px)");
}

#[wasm_bindgen_test]
fn onboarding_click_opens_the_form_and_submit_fills_the_back() {
    let (document, container) = fresh_container();
    onboard::mount(&document, &container, &Settings::default()).unwrap();

    let greeting: web_sys::HtmlElement = by_class(&container, "onboard-greeting");
    let card: web_sys::HtmlElement = by_class(&container, "onboard-card");
    let input: web_sys::HtmlInputElement = by_class(&container, "onboard-input");
    let submit: web_sys::HtmlElement = by_class(&container, "onboard-submit");
    let thanks: web_sys::HtmlElement = by_class(&container, "onboard-thanks");
    assert!(is_shown(&greeting));
    assert!(!is_shown(&card));

    greeting.click();
    assert!(!is_shown(&greeting));
    assert!(is_shown(&card));

    // Whitespace passes `required` but is not a name.
    input.set_value("   ");
    submit.click();
    assert!(is_shown(&card));
    assert_eq!(thanks.text_content().unwrap_or_default(), "");

    input.set_value(" Ada ");
    submit.click();
    assert_eq!(thanks.text_content().unwrap(), "Nice to meet you, Ada!");
}

#[wasm_bindgen_test]
fn canvas_backing_store_follows_device_pixel_ratio() {
    let (document, container) = fresh_container();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    dom::style(&canvas, &[("display", "block"), ("width", "200px"), ("height", "120px")]).unwrap();
    container.append_child(&canvas).unwrap();

    let ctx = render::context_2d(&canvas).unwrap();
    let (width, height) = render::fit_canvas(&canvas, &ctx).unwrap();
    assert_eq!((width, height), (200.0, 120.0));

    let dpr = web_sys::window().unwrap().device_pixel_ratio().max(1.0);
    assert_eq!(canvas.width(), (200.0 * dpr) as u32);
    assert_eq!(canvas.height(), (120.0 * dpr) as u32);

    // Refitting does not compound the scale.
    render::fit_canvas(&canvas, &ctx).unwrap();
    assert_eq!(canvas.width(), (200.0 * dpr) as u32);
}
