//! The "No" button that runs away.
//!
//! Hovering relocates it somewhere random on screen; clicking it opens the
//! confirmation dialog. Each confirmed decline makes the next relocation keep
//! a wider distance from the viewport edges.

use std::cell::Cell;
use std::rc::Rc;

use super::dialog::{ConfirmDialog, DialogView};
use crate::rng::RandomSource;

pub const BASE_MARGIN: f64 = 200.0;
pub const MARGIN_STEP: f64 = 40.0;
pub const MAX_MARGIN: f64 = 500.0;

pub const CONFIRM_PROMPT: &str = "Are you sure?";
pub const HEARTBREAK_MESSAGE: &str = "Ohh... you are breaking my heart 💔";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EvasionPhase {
    #[default]
    Idle,
    /// Just jumped away from the pointer. Not a resting state; every
    /// pointer-enter jumps again.
    Evading,
    ConfirmOpen,
    Heartbroken,
}

/// Per-button state, shared with the dialog callbacks the controller installs.
#[derive(Debug, Default)]
pub struct EvasionState {
    declines: Cell<u32>,
    phase: Cell<EvasionPhase>,
}

impl EvasionState {
    pub fn declines(&self) -> u32 {
        self.declines.get()
    }

    pub fn phase(&self) -> EvasionPhase {
        self.phase.get()
    }

    pub fn margin(&self) -> f64 {
        margin_for(self.declines())
    }

    fn record_decline(&self) {
        self.declines.set(self.declines.get().saturating_add(1));
    }
}

/// Distance kept from the viewport edges after `declines` confirmed declines.
pub fn margin_for(declines: u32) -> f64 {
    (BASE_MARGIN + MARGIN_STEP * f64::from(declines)).min(MAX_MARGIN)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Fixed-position offset in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
}

/// Random spot with `margin` kept on the top/left and, space permitting, on
/// the bottom/right. On a viewport too small for the margins the control pins
/// at `(margin, margin)`.
pub fn relocate(viewport: Size, button: Size, margin: f64, rng: &mut impl RandomSource) -> Placement {
    let max_x = (viewport.width - button.width - margin).max(margin);
    let max_y = (viewport.height - button.height - margin).max(margin);
    Placement {
        left: rng.range(margin, max_x),
        top: rng.range(margin, max_y),
    }
}

#[derive(Debug, Default)]
pub struct EvasiveButton {
    state: Rc<EvasionState>,
}

impl EvasiveButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EvasionState {
        &self.state
    }

    /// Where to jump on pointer-enter. `None` while the dialog covers the page.
    pub fn pointer_enter(&self, viewport: Size, button: Size, rng: &mut impl RandomSource) -> Option<Placement> {
        match self.state.phase() {
            EvasionPhase::Idle | EvasionPhase::Evading => {
                self.state.phase.set(EvasionPhase::Evading);
                Some(relocate(viewport, button, self.state.margin(), rng))
            }
            EvasionPhase::ConfirmOpen | EvasionPhase::Heartbroken => None,
        }
    }

    /// Click on the button: ask "Are you sure?".
    ///
    /// Accepting the prompt (they don't want to say no after all) closes it.
    /// Declining counts against them and shows the heartbreak message with a
    /// single "Okay", which restores the dialog and hides it.
    ///
    /// Without a dialog on the page the click is ignored and the button keeps
    /// evading.
    pub fn activate<V: DialogView>(&self, dialog: &mut ConfirmDialog<V>) {
        if !dialog.is_available() {
            log::debug!("no confirmation dialog on the page; ignoring click");
            return;
        }
        self.state.phase.set(EvasionPhase::ConfirmOpen);

        let accept_state = Rc::clone(&self.state);
        let decline_state = Rc::clone(&self.state);
        dialog.open(
            CONFIRM_PROMPT,
            move |_d: &mut ConfirmDialog<V>| accept_state.phase.set(EvasionPhase::Idle),
            move |d: &mut ConfirmDialog<V>| {
                decline_state.record_decline();
                decline_state.phase.set(EvasionPhase::Heartbroken);
                log::debug!("decline confirmed ({} so far)", decline_state.declines());
                let ack_state = Rc::clone(&decline_state);
                d.show_acknowledgement(HEARTBREAK_MESSAGE, move |d: &mut ConfirmDialog<V>| {
                    ack_state.phase.set(EvasionPhase::Idle);
                    d.close();
                });
            },
        );
    }
}
