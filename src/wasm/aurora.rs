use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::dom;
use super::render::{context_2d, fit_canvas, AnimationLoop};
use crate::aurora::{STILL_TIME, WAVES};
use crate::error::CraftError;

fn draw(ctx: &CanvasRenderingContext2d, width: f64, height: f64, time: f64, animated: bool) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);

    for wave in &WAVES {
        let outline = wave.outline(width, height, time, animated);
        ctx.begin_path();
        for (i, &(x, y)) in outline.iter().enumerate() {
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.line_to(width, height);
        ctx.line_to(0.0, height);
        ctx.close_path();

        let base = wave.base_y(height);
        let gradient = ctx.create_linear_gradient(0.0, base - wave.amplitude, 0.0, height);
        for (offset, color) in wave.stops(time, animated) {
            gradient.add_color_stop(offset, &color)?;
        }
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill();
    }
    Ok(())
}

/// Draw the wave background on `canvas`, animated unless `reduced_motion`.
pub fn start(canvas: HtmlCanvasElement, reduced_motion: bool) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(CraftError::Context("window"))?;
    let ctx = context_2d(&canvas)?;
    dom::style(
        &canvas,
        &[
            ("position", "absolute"),
            ("inset", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("pointer-events", "none"),
            ("filter", "blur(50px)"),
        ],
    )?;

    let (w, h) = fit_canvas(&canvas, &ctx)?;
    let size = Rc::new(Cell::new((w, h)));

    // Resize canvas to fit its box
    {
        let size = size.clone();
        let canvas = canvas.clone();
        let ctx = ctx.clone();
        dom::listen(&window, "resize", move |_| match fit_canvas(&canvas, &ctx) {
            Ok(fitted) => {
                size.set(fitted);
                if reduced_motion {
                    if let Err(err) = draw(&ctx, fitted.0, fitted.1, STILL_TIME, false) {
                        log::error!("aurora redraw failed: {err:?}");
                    }
                }
            }
            Err(err) => log::warn!("aurora resize failed: {err:?}"),
        })?;
    }

    if reduced_motion {
        return draw(&ctx, w, h, STILL_TIME, false);
    }

    let mut time = 0.0;
    AnimationLoop::start(move |_| {
        let (width, height) = size.get();
        if let Err(err) = draw(&ctx, width, height, time, true) {
            log::error!("aurora frame failed: {err:?}");
            return false;
        }
        time += 1.0;
        true
    })?
    .detach();
    Ok(())
}
