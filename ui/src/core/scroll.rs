//! Scroll position publishing and the parallax values derived from it.
//!
//! One publisher per page owns the window `scroll` listener; components that
//! care subscribe and get a [`ScrollSubscription`] whose drop unregisters the
//! callback. The listener is only attached while at least one subscriber
//! exists, so tearing the page down leaves no dangling callbacks.
//!
//! Hosts without a window (tests, server rendering) can drive the same path
//! through [`publish`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::prelude::*;

/// Vertical parallax rate applied to the hero title block.
pub const PARALLAX_RATE: f64 = 0.5;

/// Scroll distance over which the hero title block fades out completely.
pub const FADE_DISTANCE_PX: f64 = 800.0;

/// One vertical scroll offset reading. Ephemeral, replaced on every event.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub y: f64,
}

impl ScrollSample {
    pub fn new(y: f64) -> Self {
        Self { y }
    }

    /// Downward offset (px) for the title block at this scroll position.
    pub fn parallax_offset(self) -> f64 {
        self.y * PARALLAX_RATE
    }

    /// Opacity for the title block: 1.0 at the top, 0.0 at
    /// [`FADE_DISTANCE_PX`]. Clamped to `[0, 1]`; the source site lets this
    /// go negative past 800px, clamping is a deliberate deviation.
    pub fn fade(self) -> f64 {
        (1.0 - self.y / FADE_DISTANCE_PX).clamp(0.0, 1.0)
    }
}

type Callback = Rc<dyn Fn(ScrollSample)>;

struct Publisher {
    subscribers: RefCell<Vec<(u64, Callback)>>,
    next_id: Cell<u64>,
    #[cfg(target_arch = "wasm32")]
    listener: RefCell<Option<wasm_bindgen::closure::Closure<dyn FnMut()>>>,
}

impl Publisher {
    fn new() -> Self {
        Self {
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            #[cfg(target_arch = "wasm32")]
            listener: RefCell::new(None),
        }
    }
}

thread_local! {
    static PUBLISHER: Publisher = Publisher::new();
}

/// Handle for one subscriber. Dropping it unregisters the callback; the
/// window listener is detached when the last subscriber goes away.
pub struct ScrollSubscription {
    id: u64,
}

/// Register `callback` with the page-wide scroll publisher.
pub fn subscribe(callback: impl Fn(ScrollSample) + 'static) -> ScrollSubscription {
    PUBLISHER.with(|publisher| {
        let id = publisher.next_id.get();
        publisher.next_id.set(id + 1);

        let mut subscribers = publisher.subscribers.borrow_mut();
        subscribers.push((id, Rc::new(callback)));

        #[cfg(target_arch = "wasm32")]
        if subscribers.len() == 1 {
            attach_window_listener(publisher);
        }

        ScrollSubscription { id }
    })
}

/// Push a sample to every subscriber. On the web the window listener calls
/// this; window-less hosts may call it directly.
pub fn publish(sample: ScrollSample) {
    // Snapshot so a callback can (un)subscribe without re-entering the borrow.
    let callbacks: Vec<Callback> = PUBLISHER.with(|publisher| {
        publisher
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect()
    });

    for callback in callbacks {
        callback(sample);
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        PUBLISHER.with(|publisher| {
            let mut subscribers = publisher.subscribers.borrow_mut();
            subscribers.retain(|(id, _)| *id != self.id);

            #[cfg(target_arch = "wasm32")]
            if subscribers.is_empty() {
                detach_window_listener(publisher);
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn attach_window_listener(publisher: &Publisher) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let closure = Closure::wrap(Box::new(|| {
        publish(ScrollSample::new(current_scroll_y()));
    }) as Box<dyn FnMut()>);

    if let Some(window) = web_sys::window() {
        if window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .is_ok()
        {
            publisher.listener.borrow_mut().replace(closure);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn detach_window_listener(publisher: &Publisher) {
    use wasm_bindgen::JsCast;

    if let Some(closure) = publisher.listener.borrow_mut().take() {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Subscribe the calling component to scroll samples. The subscription lives
/// in hook state, so unmounting the component tears the callback down.
pub fn use_scroll_sample() -> Signal<ScrollSample> {
    let sample = use_signal(ScrollSample::default);
    let _subscription: Rc<ScrollSubscription> = use_hook(|| {
        Rc::new(subscribe(move |value| {
            let mut sample = sample;
            sample.set(value);
        }))
    });
    sample
}

/// Scroll the element with `id` into view. A missing target is a no-op.
pub fn scroll_to_anchor(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        {
            element.scroll_into_view();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_offset_matches_rate() {
        assert_eq!(ScrollSample::new(200.0).parallax_offset(), 100.0);
        assert_eq!(ScrollSample::new(0.0).parallax_offset(), 0.0);
    }

    #[test]
    fn fade_interpolates_and_clamps() {
        assert_eq!(ScrollSample::new(200.0).fade(), 0.75);
        assert_eq!(ScrollSample::new(800.0).fade(), 0.0);
        // Past the fade distance the value would go negative; we clamp.
        assert_eq!(ScrollSample::new(1200.0).fade(), 0.0);
        // Elastic overscroll above the top stays at full opacity.
        assert_eq!(ScrollSample::new(-50.0).fade(), 1.0);
    }

    #[test]
    fn publish_reaches_every_subscriber() {
        let seen_a = Rc::new(RefCell::new(Vec::new()));
        let seen_b = Rc::new(RefCell::new(Vec::new()));

        let sub_a = {
            let seen = seen_a.clone();
            subscribe(move |sample| seen.borrow_mut().push(sample.y))
        };
        let sub_b = {
            let seen = seen_b.clone();
            subscribe(move |sample| seen.borrow_mut().push(sample.y))
        };

        publish(ScrollSample::new(120.0));
        assert_eq!(*seen_a.borrow(), vec![120.0]);
        assert_eq!(*seen_b.borrow(), vec![120.0]);

        drop(sub_a);
        drop(sub_b);
    }

    #[test]
    fn dropped_subscription_stops_receiving() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let subscription = {
            let seen = seen.clone();
            subscribe(move |sample| seen.borrow_mut().push(sample.y))
        };

        publish(ScrollSample::new(10.0));
        drop(subscription);
        publish(ScrollSample::new(20.0));

        assert_eq!(*seen.borrow(), vec![10.0]);
    }
}
