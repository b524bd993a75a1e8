//! In-memory form host
//!
//! A single-threaded stand-in for a browser page: named fields holding a
//! value, input listeners dispatched synchronously, and a ready flag. The
//! CLI uses it to replay keystrokes, tests use it to drive the binder.

use crate::domain::model::Keystroke;
use crate::domain::ports::{FormHost, InputField, InputHandler, ReadyCallback};
use crate::utils::error::Result;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

const INPUT_TAG: &str = "input";

struct FieldState {
    tag: &'static str,
    name: Option<String>,
    value: RefCell<String>,
    listeners: RefCell<Vec<InputHandler<MemoryField>>>,
}

#[derive(Clone)]
pub struct MemoryField {
    state: Rc<FieldState>,
}

impl MemoryField {
    fn new(tag: &'static str, name: Option<&str>) -> Self {
        Self {
            state: Rc::new(FieldState {
                tag,
                name: name.map(str::to_string),
                value: RefCell::new(String::new()),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn is_input(&self) -> bool {
        self.state.tag == INPUT_TAG
    }

    pub fn listener_count(&self) -> usize {
        self.state.listeners.borrow().len()
    }

    /// Replaces the raw value and fires an input event, like a paste.
    pub fn input(&self, value: &str) {
        self.set_value(value);
        self.dispatch_input();
    }

    /// Types `text` one character at a time at the end of the field,
    /// firing an input event after each character.
    pub fn type_text(&self, text: &str) -> Vec<Keystroke> {
        text.chars()
            .map(|key| {
                let mut next = self.value();
                next.push(key);
                self.input(&next);
                Keystroke {
                    key,
                    value: self.value(),
                }
            })
            .collect()
    }

    // Listeners run outside the borrow so they may fire input or attach
    // more listeners; nested events see no listeners.
    fn dispatch_input(&self) {
        let mut running = std::mem::take(&mut *self.state.listeners.borrow_mut());
        for listener in running.iter_mut() {
            listener(self);
        }

        let mut listeners = self.state.listeners.borrow_mut();
        let added = std::mem::take(&mut *listeners);
        *listeners = running;
        listeners.extend(added);
    }
}

impl InputField for MemoryField {
    fn name(&self) -> Option<String> {
        self.state.name.clone()
    }

    fn value(&self) -> String {
        self.state.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.state.value.borrow_mut() = value.to_string();
    }
}

impl fmt::Debug for MemoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryField")
            .field("tag", &self.state.tag)
            .field("name", &self.state.name)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[derive(Default)]
pub struct MemoryForm {
    fields: RefCell<Vec<MemoryField>>,
    ready: Cell<bool>,
    pending: RefCell<Vec<ReadyCallback>>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_input(&self, name: &str) -> MemoryField {
        self.add_field(MemoryField::new(INPUT_TAG, Some(name)))
    }

    pub fn add_unnamed_input(&self) -> MemoryField {
        self.add_field(MemoryField::new(INPUT_TAG, None))
    }

    /// A non-input element carrying a `name` attribute; never bound.
    pub fn add_textarea(&self, name: &str) -> MemoryField {
        self.add_field(MemoryField::new("textarea", Some(name)))
    }

    fn add_field(&self, field: MemoryField) -> MemoryField {
        self.fields.borrow_mut().push(field.clone());
        field
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    /// Runs every callback queued by [`FormHost::when_ready`]. Idempotent.
    pub fn mark_ready(&self) {
        if self.ready.replace(true) {
            return;
        }
        let pending = std::mem::take(&mut *self.pending.borrow_mut());
        tracing::debug!(callbacks = pending.len(), "Form ready");
        for callback in pending {
            callback();
        }
    }
}

impl FormHost for MemoryForm {
    type Field = MemoryField;

    fn inputs_named(&self, name: &str) -> Result<Vec<MemoryField>> {
        Ok(self
            .fields
            .borrow()
            .iter()
            .filter(|field| field.is_input() && field.state.name.as_deref() == Some(name))
            .cloned()
            .collect())
    }

    fn listen_input(&self, field: &MemoryField, handler: InputHandler<MemoryField>) -> Result<()> {
        field.state.listeners.borrow_mut().push(handler);
        Ok(())
    }

    fn when_ready(&self, callback: ReadyCallback) -> Result<()> {
        if self.ready.get() {
            callback();
        } else {
            self.pending.borrow_mut().push(callback);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_named_skips_other_elements() {
        let form = MemoryForm::new();
        form.add_input("cvv");
        form.add_textarea("cvv");
        form.add_unnamed_input();
        form.add_input("card_number");

        let found = form.inputs_named("cvv").unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].is_input());
    }

    #[test]
    fn test_input_dispatches_to_listeners() {
        let form = MemoryForm::new();
        let field = form.add_input("note");
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        form.listen_input(
            &field,
            Box::new(move |f: &MemoryField| sink.borrow_mut().push(f.value())),
        )
        .unwrap();

        field.input("a");
        field.input("ab");
        assert_eq!(*seen.borrow(), vec!["a".to_string(), "ab".to_string()]);
    }

    #[test]
    fn test_when_ready_queues_until_marked() {
        let form = MemoryForm::new();
        let hits = Rc::new(Cell::new(0));

        let counter = Rc::clone(&hits);
        form.when_ready(Box::new(move || counter.set(counter.get() + 1)))
            .unwrap();
        assert_eq!(hits.get(), 0);
        assert!(!form.is_ready());

        form.mark_ready();
        assert!(form.is_ready());
        form.mark_ready();
        assert_eq!(hits.get(), 1);

        let counter = Rc::clone(&hits);
        form.when_ready(Box::new(move || counter.set(counter.get() + 1)))
            .unwrap();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_listener_may_refire_and_attach() {
        let form = Rc::new(MemoryForm::new());
        let field = form.add_input("note");
        let calls = Rc::new(Cell::new(0));

        let host = Rc::clone(&form);
        let counter = Rc::clone(&calls);
        form.listen_input(
            &field,
            Box::new(move |f: &MemoryField| {
                counter.set(counter.get() + 1);
                if f.value() == "again" {
                    f.input("done");
                }
                if counter.get() == 1 {
                    let late = Rc::clone(&counter);
                    host.listen_input(f, Box::new(move |_: &MemoryField| late.set(late.get() + 10)))
                        .unwrap();
                }
            }),
        )
        .unwrap();

        field.input("again");
        assert_eq!(field.value(), "done");
        assert_eq!(calls.get(), 1);
        assert_eq!(field.listener_count(), 2);

        field.input("x");
        assert_eq!(calls.get(), 12);
    }

    #[test]
    fn test_type_text_without_listeners_appends() {
        let form = MemoryForm::new();
        let field = form.add_input("plain");
        let strokes = field.type_text("ab");
        assert_eq!(strokes.last().map(|k| k.value.as_str()), Some("ab"));
        assert_eq!(field.value(), "ab");
    }
}
