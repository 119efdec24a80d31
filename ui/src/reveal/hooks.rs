//! Dioxus wiring for the reveal engine.
//!
//! The coroutine owns the element's [`RevealState`]; timer futures are
//! detached and talk back through the coroutine channel. Unmounting drops
//! the coroutine and closes the channel, so a timer that fires late sends
//! into the void instead of mutating destroyed state. The generation guard
//! in the engine covers the remaining races.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::{platform, timing};

use super::engine::{RevealConfig, RevealPhase, RevealState, ScheduledPhase};

#[derive(Debug, Clone, Copy)]
enum RevealEvent {
    Begin,
    PhaseElapsed { generation: u64, next: RevealPhase },
}

/// Handle for one fade-in element.
#[derive(Clone, Copy)]
pub struct FadeIn {
    state: Signal<RevealState>,
}

impl FadeIn {
    /// Inline style for the element's current phase.
    pub fn style(&self) -> String {
        self.state.read().style()
    }

    pub fn phase(&self) -> RevealPhase {
        self.state.read().phase()
    }
}

/// Run one staggered entrance for the calling component's element.
///
/// The delay counts from this component's mount. Styles move from the
/// configured offset/scale at opacity 0 to the identity transform over
/// `duration_ms`.
pub fn use_fade_in(config: RevealConfig) -> FadeIn {
    let state = use_signal(|| RevealState::new(config));

    let sender_slot: Rc<RefCell<Option<UnboundedSender<RevealEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<RevealEvent>| {
        let sender_slot = sender_slot_for_loop.clone();
        let mut state_signal = state;

        async move {
            while let Some(event) = rx.next().await {
                match event {
                    RevealEvent::Begin => {
                        if let Some(schedule) = state_signal.write().begin() {
                            queue_phase_timer(sender_slot.clone(), schedule);
                        }
                    }
                    RevealEvent::PhaseElapsed { generation, next } => {
                        if let Some(schedule) = state_signal.write().advance(generation, next) {
                            queue_phase_timer(sender_slot.clone(), schedule);
                        }
                    }
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(coroutine.tx());

    // Arm the delay timer once, on mount.
    use_hook(|| coroutine.send(RevealEvent::Begin));

    FadeIn { state }
}

fn queue_phase_timer(
    sender_slot: Rc<RefCell<Option<UnboundedSender<RevealEvent>>>>,
    schedule: ScheduledPhase,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(schedule.wait_ms).await;
            let _ = sender.unbounded_send(RevealEvent::PhaseElapsed {
                generation: schedule.generation,
                next: schedule.next,
            });
        });
    }
}
