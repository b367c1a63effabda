use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::CraftError;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A `requestAnimationFrame` loop. The callback receives the frame timestamp
/// in ms and returns `false` to stop.
pub struct AnimationLoop {
    handle: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl AnimationLoop {
    pub fn start<F>(mut frame: F) -> Result<AnimationLoop, JsValue>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let win = window().ok_or(CraftError::Context("window"))?;

        // `callback` holds the animation-frame closure so that it can keep
        // calling `request_animation_frame` on itself. Storing it inside an
        // `Option` lets us create the `Closure` first and then reach it from
        // within itself.
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));

        let next = callback.clone();
        let next_handle = handle.clone();
        let raf_window = win.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |time: f64| {
            if !frame(time) {
                next_handle.set(None);
                return;
            }
            let scheduled = next
                .borrow()
                .as_ref()
                .map(|cb| raf_window.request_animation_frame(cb.as_ref().unchecked_ref()));
            match scheduled {
                Some(Ok(id)) => next_handle.set(Some(id)),
                Some(Err(err)) => {
                    log::error!("request_animation_frame failed: {err:?}");
                    next_handle.set(None);
                }
                None => next_handle.set(None),
            }
        }) as Box<dyn FnMut(f64)>));

        let id = match callback.borrow().as_ref() {
            Some(cb) => win.request_animation_frame(cb.as_ref().unchecked_ref())?,
            None => return Err(CraftError::Context("animation frame callback").into()),
        };
        handle.set(Some(id));

        Ok(AnimationLoop { handle, callback })
    }

    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }

    /// Keep the loop running for the rest of the page's life.
    pub fn detach(self) {
        std::mem::forget(self);
    }

    /// Cancel the pending frame, if any.
    pub fn stop(&self) {
        if let (Some(id), Some(win)) = (self.handle.take(), window()) {
            let _ = win.cancel_animation_frame(id);
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
        // Break the closure's self-reference.
        self.callback.borrow_mut().take();
    }
}

/// 2D context sized for the device pixel ratio, drawing in CSS pixels.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    Ok(canvas
        .get_context("2d")?
        .ok_or(CraftError::Context("canvas 2d"))?
        .dyn_into()?)
}

/// Match the backing store to the element's CSS size. Returns the CSS size.
pub fn fit_canvas(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) -> Result<(f64, f64), JsValue> {
    let dpr = window().map_or(1.0, |w| w.device_pixel_ratio()).max(1.0);
    let rect = canvas.get_bounding_client_rect();
    canvas.set_width((rect.width() * dpr) as u32);
    canvas.set_height((rect.height() * dpr) as u32);
    // Resizing resets the context, so set the scale absolutely.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    Ok((rect.width(), rect.height()))
}
