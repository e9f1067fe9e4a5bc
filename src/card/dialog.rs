//! Yes/No confirmation prompt with one callback slot per action.
//!
//! `open` replaces every slot, so a stale handler from an earlier prompt can
//! never fire. Handlers receive the dialog itself, which lets a decline handler
//! chain straight into the acknowledgement layout without reaching back into
//! shared page state.

use web_sys::{Document, Element};

use super::{by_id, set_hidden};

pub const ACCEPT_LABEL: &str = "Yes";
pub const DECLINE_LABEL: &str = "No";
pub const ACKNOWLEDGE_LABEL: &str = "Okay";

/// Which buttons the dialog shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogLayout {
    /// Accept + decline.
    Choice,
    /// Single acknowledgement control (the secondary button relabelled).
    Acknowledge,
}

/// Rendering side of the dialog.
pub trait DialogView: 'static {
    fn render(&mut self, message: &str, layout: DialogLayout);
    fn set_visible(&mut self, visible: bool);

    /// Whether the page can show the dialog and let the visitor answer it.
    fn is_present(&self) -> bool {
        true
    }
}

pub type DialogHandler<V> = Box<dyn FnMut(&mut ConfirmDialog<V>)>;

pub struct ConfirmDialog<V: DialogView> {
    view: V,
    message: String,
    layout: DialogLayout,
    visible: bool,
    on_accept: Option<DialogHandler<V>>,
    on_decline: Option<DialogHandler<V>>,
    on_acknowledge: Option<DialogHandler<V>>,
    // bumped by every `open`; a handler that reopens the dialog must not be
    // written back over the new bindings
    generation: u64,
}

impl<V: DialogView> ConfirmDialog<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            message: String::new(),
            layout: DialogLayout::Choice,
            visible: false,
            on_accept: None,
            on_decline: None,
            on_acknowledge: None,
            generation: 0,
        }
    }

    pub fn open(
        &mut self,
        message: &str,
        on_accept: impl FnMut(&mut Self) + 'static,
        on_decline: impl FnMut(&mut Self) + 'static,
    ) {
        self.generation += 1;
        self.on_accept = Some(Box::new(on_accept));
        self.on_decline = Some(Box::new(on_decline));
        self.on_acknowledge = None;
        self.message = message.to_string();
        self.layout = DialogLayout::Choice;
        self.view.render(&self.message, self.layout);
        self.show();
    }

    /// Swap the content for `message` and a single acknowledgement control.
    pub fn show_acknowledgement(&mut self, message: &str, on_acknowledge: impl FnMut(&mut Self) + 'static) {
        self.on_acknowledge = Some(Box::new(on_acknowledge));
        self.message = message.to_string();
        self.layout = DialogLayout::Acknowledge;
        self.view.render(&self.message, self.layout);
        self.show();
    }

    /// Primary button. Runs the accept handler, then hides the dialog.
    pub fn accept(&mut self) {
        if self.layout != DialogLayout::Choice {
            return;
        }
        let generation = self.generation;
        self.fire(Self::accept_slot);
        if self.generation == generation {
            self.close();
        }
    }

    /// Runs the decline handler. Visibility is left to the handler.
    pub fn decline(&mut self) {
        if self.layout != DialogLayout::Choice {
            return;
        }
        self.fire(Self::decline_slot);
    }

    /// Restores the two-button layout, then runs the one-shot acknowledgement handler.
    pub fn acknowledge(&mut self) {
        if self.layout != DialogLayout::Acknowledge {
            return;
        }
        self.layout = DialogLayout::Choice;
        self.view.render(&self.message, self.layout);
        if let Some(mut handler) = self.on_acknowledge.take() {
            handler(self);
        }
    }

    /// The secondary button is "No" in the choice layout and "Okay" in the
    /// acknowledgement layout; exactly one handler runs per press.
    pub fn press_secondary(&mut self) {
        match self.layout {
            DialogLayout::Choice => self.decline(),
            DialogLayout::Acknowledge => self.acknowledge(),
        }
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.view.set_visible(false);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn layout(&self) -> DialogLayout {
        self.layout
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_available(&self) -> bool {
        self.view.is_present()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn show(&mut self) {
        self.visible = true;
        self.view.set_visible(true);
    }

    fn accept_slot(&mut self) -> &mut Option<DialogHandler<V>> {
        &mut self.on_accept
    }

    fn decline_slot(&mut self) -> &mut Option<DialogHandler<V>> {
        &mut self.on_decline
    }

    fn fire(&mut self, slot: fn(&mut Self) -> &mut Option<DialogHandler<V>>) {
        let generation = self.generation;
        if let Some(mut handler) = slot(self).take() {
            handler(self);
            if self.generation == generation {
                let s = slot(self);
                if s.is_none() {
                    *s = Some(handler);
                }
            }
        }
    }
}

// --- DOM view ----------------------------------------------------------------

/// `#confirmModal` with `#confirmMessage`, `#confirmYes` and `#confirmNo`.
/// Any of them may be missing.
pub struct DomDialogView {
    modal: Option<Element>,
    message: Option<Element>,
    accept: Option<Element>,
    decline: Option<Element>,
}

impl DomDialogView {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            modal: by_id(doc, "confirmModal"),
            message: by_id(doc, "confirmMessage"),
            accept: by_id(doc, "confirmYes"),
            decline: by_id(doc, "confirmNo"),
        }
    }
}

impl DialogView for DomDialogView {
    fn render(&mut self, message: &str, layout: DialogLayout) {
        if let Some(el) = &self.message {
            el.set_text_content(Some(message));
        }
        if let Some(el) = &self.accept {
            el.set_text_content(Some(ACCEPT_LABEL));
            set_hidden(el, layout == DialogLayout::Acknowledge);
        }
        if let Some(el) = &self.decline {
            let label = match layout {
                DialogLayout::Choice => DECLINE_LABEL,
                DialogLayout::Acknowledge => ACKNOWLEDGE_LABEL,
            };
            el.set_text_content(Some(label));
        }
    }

    fn set_visible(&mut self, visible: bool) {
        if let Some(el) = &self.modal {
            set_hidden(el, !visible);
        }
    }

    // without the secondary button nothing could ever close it again
    fn is_present(&self) -> bool {
        self.modal.is_some() && self.decline.is_some()
    }
}
