//! Window listeners feeding pointer and scroll samples into frame slots.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page attaches one tracker when it mounts and drops it on
//! cleanup. Dropping removes every listener and cancels pending frames, so
//! no publish can reach a torn-down view.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, PointerEvent, Window};

use crate::state::motion::{CursorPosition, MotionInput, ScrollProgress, TRACKED_EVENTS};
use crate::util::frame_slot::{FrameHandle, FrameScheduler, PendingSlot};

/// `requestAnimationFrame` bound to one source's frame callback.
struct RafScheduler {
    window: Window,
    on_frame: Closure<dyn FnMut(f64)>,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&self) -> Option<FrameHandle> {
        self.window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle);
    }
}

/// One input source: its pending slot, its scheduler, and its publisher.
struct Source<T> {
    slot: Rc<RefCell<PendingSlot<T>>>,
    scheduler: RafScheduler,
    publish: Rc<dyn Fn(T)>,
}

impl<T: 'static> Source<T> {
    fn new(window: &Window, publish: Rc<dyn Fn(T)>) -> Self {
        let slot = Rc::new(RefCell::new(PendingSlot::new()));
        let slot_for_frame = Rc::clone(&slot);
        let publish_for_frame = Rc::clone(&publish);
        let on_frame = Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
            let sample = slot_for_frame.borrow_mut().take_for_frame();
            if let Some(sample) = sample {
                publish_for_frame(sample);
            }
        });
        Self { slot, scheduler: RafScheduler { window: window.clone(), on_frame }, publish }
    }

    fn push(&self, sample: T) {
        let immediate = self.slot.borrow_mut().push(sample, &self.scheduler);
        if let Some(sample) = immediate {
            (self.publish)(sample);
        }
    }

    fn cancel(&self) {
        self.slot.borrow_mut().cancel(&self.scheduler);
    }
}

fn viewport_extent(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

fn sample_scroll(window: &Window) -> ScrollProgress {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = viewport_extent(window.inner_height());
    let scroll_height = window
        .document()
        .and_then(|doc| doc.document_element())
        .map_or(viewport_height, |root| f64::from(root.scroll_height()));
    ScrollProgress::from_metrics(scroll_y, scroll_height, viewport_height)
}

/// Live pointer/scroll subscription on `window`.
pub struct PointerTracker {
    window: Window,
    pointer: Rc<Source<CursorPosition>>,
    scroll: Rc<Source<ScrollProgress>>,
    on_pointer: Closure<dyn FnMut(PointerEvent)>,
    on_scroll: Closure<dyn FnMut(web_sys::Event)>,
    attached: bool,
}

impl PointerTracker {
    /// Subscribe to every `TRACKED_EVENTS` entry with passive listeners and
    /// take one scroll sample right away. Returns `None` outside a browser window.
    pub fn attach(
        publish_cursor: impl Fn(CursorPosition) + 'static,
        publish_scroll: impl Fn(ScrollProgress) + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let pointer = Rc::new(Source::new(&window, Rc::new(publish_cursor)));
        let scroll = Rc::new(Source::new(&window, Rc::new(publish_scroll)));

        let on_pointer = {
            let window = window.clone();
            let pointer = Rc::clone(&pointer);
            Closure::<dyn FnMut(PointerEvent)>::new(move |ev: PointerEvent| {
                pointer.push(CursorPosition::from_client(
                    f64::from(ev.client_x()),
                    f64::from(ev.client_y()),
                    viewport_extent(window.inner_width()),
                    viewport_extent(window.inner_height()),
                ));
            })
        };
        let on_scroll = {
            let window = window.clone();
            let scroll = Rc::clone(&scroll);
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
                scroll.push(sample_scroll(&window));
            })
        };

        let tracker = Self { window, pointer, scroll, on_pointer, on_scroll, attached: true };
        let passive = AddEventListenerOptions::new();
        passive.set_passive(true);
        for (event, input) in TRACKED_EVENTS {
            let _ = tracker.window.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                tracker.listener(input),
                &passive,
            );
        }

        tracker.scroll.push(sample_scroll(&tracker.window));
        log::debug!("pointer tracker attached");
        Some(tracker)
    }

    fn listener(&self, input: MotionInput) -> &js_sys::Function {
        match input {
            MotionInput::Cursor => self.on_pointer.as_ref().unchecked_ref(),
            MotionInput::Scroll => self.on_scroll.as_ref().unchecked_ref(),
        }
    }

    /// Remove listeners and cancel pending frames. Safe to call twice.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        for (event, input) in TRACKED_EVENTS {
            let _ = self.window.remove_event_listener_with_callback(event, self.listener(input));
        }
        self.pointer.cancel();
        self.scroll.cancel();
        log::debug!("pointer tracker detached");
    }
}

impl Drop for PointerTracker {
    fn drop(&mut self) {
        self.detach();
    }
}
