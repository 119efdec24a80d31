//! Pure reveal state machine.
//!
//! Each animated element owns one [`RevealState`]. Timers are scheduled by
//! returning [`ScheduledPhase`] tokens; the owner sleeps for `wait_ms` and
//! feeds the token back through [`RevealState::advance`]. Tokens carry the
//! generation they were issued under, so anything cancelled (or restarted)
//! in the meantime ignores the late timer instead of mutating a state that
//! has moved on.

/// Entrance animation parameters for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Milliseconds from mount to the start of the transition. Each element
    /// counts from its own mount, not from a shared start.
    pub delay_ms: u64,
    /// Milliseconds the eased transition takes.
    pub duration_ms: u64,
    /// Initial downward offset, in px.
    pub translate_y_px: f64,
    /// Initial scale factor.
    pub scale: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            delay_ms: 0,
            duration_ms: 600,
            translate_y_px: 20.0,
            scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Revealing,
    Visible,
}

/// A pending phase change: sleep `wait_ms`, then feed the token back through
/// [`RevealState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledPhase {
    pub generation: u64,
    pub wait_ms: u64,
    pub next: RevealPhase,
}

/// Per-element reveal state. Created Hidden on mount, advanced by timers,
/// untouched once Visible.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealState {
    pub config: RevealConfig,
    phase: RevealPhase,
    started: bool,
    generation: u64,
}

impl RevealState {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            phase: RevealPhase::Hidden,
            started: false,
            generation: 0,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Arm the delay timer. Only the first call per state schedules anything;
    /// the mount lifecycle implies at most one outstanding reveal.
    pub fn begin(&mut self) -> Option<ScheduledPhase> {
        if self.started {
            return None;
        }
        self.started = true;
        Some(ScheduledPhase {
            generation: self.generation,
            wait_ms: self.config.delay_ms,
            next: RevealPhase::Revealing,
        })
    }

    /// Apply an elapsed timer. Stale generations and out-of-order phases are
    /// ignored. Returns the follow-up timer, if any.
    pub fn advance(&mut self, generation: u64, next: RevealPhase) -> Option<ScheduledPhase> {
        if generation != self.generation {
            return None;
        }
        match (self.phase, next) {
            (RevealPhase::Hidden, RevealPhase::Revealing) => {
                if self.config.duration_ms == 0 {
                    self.phase = RevealPhase::Visible;
                    return None;
                }
                self.phase = RevealPhase::Revealing;
                Some(ScheduledPhase {
                    generation,
                    wait_ms: self.config.duration_ms,
                    next: RevealPhase::Visible,
                })
            }
            (RevealPhase::Revealing, RevealPhase::Visible) => {
                self.phase = RevealPhase::Visible;
                None
            }
            _ => None,
        }
    }

    /// Invalidate every outstanding timer. Late [`advance`] calls become
    /// no-ops, so a torn-down element is never mutated.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Inline style for the current phase. Hidden holds the configured
    /// offset/scale at opacity 0; from Revealing on, the browser transitions
    /// to the identity transform over `duration_ms`.
    pub fn style(&self) -> String {
        match self.phase {
            RevealPhase::Hidden => format!(
                "opacity: 0; transform: translateY({}px) scale({});",
                self.config.translate_y_px, self.config.scale
            ),
            RevealPhase::Revealing | RevealPhase::Visible => format!(
                "opacity: 1; transform: translateY(0px) scale(1); \
                 transition: opacity {0}ms ease-out, transform {0}ms ease-out;",
                self.config.duration_ms
            ),
        }
    }
}

impl RevealConfig {
    /// Phase on the element's own timeline: Hidden on `[0, delay)`,
    /// Revealing on `[delay, delay + duration)`, Visible from then on.
    pub fn phase_at(&self, elapsed_ms: f64) -> RevealPhase {
        let delay = self.delay_ms as f64;
        let done = delay + self.duration_ms as f64;
        if elapsed_ms < delay {
            RevealPhase::Hidden
        } else if elapsed_ms < done {
            RevealPhase::Revealing
        } else {
            RevealPhase::Visible
        }
    }

    /// Eased interpolation progress at `elapsed_ms`: 0 while Hidden, 1 once
    /// Visible, ease-out cubic in between.
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        match self.phase_at(elapsed_ms) {
            RevealPhase::Hidden => 0.0,
            RevealPhase::Visible => 1.0,
            RevealPhase::Revealing => {
                let t = (elapsed_ms - self.delay_ms as f64) / self.duration_ms as f64;
                ease_out_cubic(t)
            }
        }
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subtitle_config() -> RevealConfig {
        RevealConfig {
            delay_ms: 150,
            duration_ms: 600,
            ..Default::default()
        }
    }

    #[test]
    fn timeline_phases_are_half_open() {
        let config = subtitle_config();
        assert_eq!(config.phase_at(0.0), RevealPhase::Hidden);
        assert_eq!(config.phase_at(149.9), RevealPhase::Hidden);
        assert_eq!(config.phase_at(150.0), RevealPhase::Revealing);
        assert_eq!(config.phase_at(749.9), RevealPhase::Revealing);
        assert_eq!(config.phase_at(750.0), RevealPhase::Visible);
        assert_eq!(config.phase_at(10_000.0), RevealPhase::Visible);
    }

    #[test]
    fn progress_is_eased_and_bounded() {
        let config = subtitle_config();
        assert_eq!(config.progress_at(0.0), 0.0);
        assert_eq!(config.progress_at(150.0), 0.0);
        assert_eq!(config.progress_at(750.0), 1.0);

        let early = config.progress_at(300.0);
        let late = config.progress_at(600.0);
        assert!(early > 0.0 && early < late && late < 1.0);
        // Ease-out front-loads movement.
        assert!(config.progress_at(450.0) > 0.5);
    }

    #[test]
    fn timers_chain_hidden_to_visible() {
        let mut state = RevealState::new(subtitle_config());
        assert_eq!(state.phase(), RevealPhase::Hidden);

        let delay = state.begin().expect("first begin schedules");
        assert_eq!(delay.wait_ms, 150);
        assert_eq!(delay.next, RevealPhase::Revealing);
        assert!(state.begin().is_none(), "at most one outstanding reveal");

        let transition = state
            .advance(delay.generation, delay.next)
            .expect("delay timer schedules the transition");
        assert_eq!(state.phase(), RevealPhase::Revealing);
        assert_eq!(transition.wait_ms, 600);
        assert_eq!(transition.next, RevealPhase::Visible);

        assert!(state.advance(transition.generation, transition.next).is_none());
        assert_eq!(state.phase(), RevealPhase::Visible);
    }

    #[test]
    fn cancelled_timers_mutate_nothing() {
        let mut state = RevealState::new(subtitle_config());
        let delay = state.begin().expect("schedules");

        state.cancel();
        let before = state.clone();

        assert!(state.advance(delay.generation, delay.next).is_none());
        assert_eq!(state, before);
        assert_eq!(state.phase(), RevealPhase::Hidden);
    }

    #[test]
    fn out_of_order_phases_are_ignored() {
        let mut state = RevealState::new(subtitle_config());
        let delay = state.begin().expect("schedules");

        // A Visible timer arriving while still Hidden does nothing.
        assert!(state.advance(delay.generation, RevealPhase::Visible).is_none());
        assert_eq!(state.phase(), RevealPhase::Hidden);
    }

    #[test]
    fn zero_duration_reveals_in_one_step() {
        let mut state = RevealState::new(RevealConfig {
            delay_ms: 100,
            duration_ms: 0,
            ..Default::default()
        });
        let delay = state.begin().expect("schedules");
        assert!(state.advance(delay.generation, delay.next).is_none());
        assert_eq!(state.phase(), RevealPhase::Visible);
    }

    #[test]
    fn styles_track_the_phase() {
        let mut state = RevealState::new(RevealConfig {
            delay_ms: 0,
            duration_ms: 600,
            translate_y_px: 25.0,
            scale: 0.95,
        });

        let hidden = state.style();
        assert!(hidden.contains("opacity: 0"));
        assert!(hidden.contains("translateY(25px)"));
        assert!(hidden.contains("scale(0.95)"));

        let delay = state.begin().expect("schedules");
        let _ = state.advance(delay.generation, delay.next);

        let revealing = state.style();
        assert!(revealing.contains("opacity: 1"));
        assert!(revealing.contains("600ms ease-out"));
    }
}
