use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::state::notifications::{Notification, Notifier};
use crate::utils::storage::DomError;

use super::flow::SubscriptionHandlers;
use super::provider::{PaymentProvider, RenderRequest};
use super::script::{ScriptCallback, ScriptHost, ScriptOutcome, ScriptStatus};
use super::PaymentError;

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    seen: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn len(&self) -> usize {
        self.seen.borrow().len()
    }

    pub fn take(&self) -> Vec<Notification> {
        self.seen.borrow_mut().drain(..).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.borrow_mut().push(notification);
    }
}

/// In-memory document: tags keyed by id plus callbacks waiting on them.
#[derive(Clone, Default)]
pub struct FakeScriptHost {
    inner: Rc<RefCell<FakeDocument>>,
}

#[derive(Default)]
struct FakeDocument {
    tags: HashMap<String, (String, ScriptStatus)>,
    waiting: Vec<(String, ScriptCallback)>,
    injections: usize,
}

impl FakeScriptHost {
    pub fn inject_count(&self) -> usize {
        self.inner.borrow().injections
    }

    pub fn tag_count(&self, id: &str) -> usize {
        usize::from(self.inner.borrow().tags.contains_key(id))
    }

    pub fn src(&self, id: &str) -> Option<String> {
        self.inner.borrow().tags.get(id).map(|(src, _)| src.clone())
    }

    /// Finishes the download of `id` and fires every callback waiting on it.
    pub fn settle(&self, id: &str, outcome: ScriptOutcome) {
        let callbacks = {
            let mut doc = self.inner.borrow_mut();
            if let Some((_, status)) = doc.tags.get_mut(id) {
                *status = match outcome {
                    ScriptOutcome::Loaded => ScriptStatus::Loaded,
                    ScriptOutcome::Failed => ScriptStatus::Failed,
                };
            }
            let (matching, rest): (Vec<_>, Vec<_>) =
                doc.waiting.drain(..).partition(|(tag, _)| tag == id);
            doc.waiting = rest;
            matching
        };
        for (_, callback) in callbacks {
            callback(outcome);
        }
    }
}

impl ScriptHost for FakeScriptHost {
    fn status(&self, id: &str) -> ScriptStatus {
        self.inner
            .borrow()
            .tags
            .get(id)
            .map(|(_, status)| *status)
            .unwrap_or(ScriptStatus::Absent)
    }

    fn inject(&self, id: &str, src: &str, on_settled: ScriptCallback) -> Result<(), PaymentError> {
        let mut doc = self.inner.borrow_mut();
        if doc.tags.contains_key(id) {
            return Err(DomError::Js(format!("duplicate script #{}", id)).into());
        }
        doc.injections += 1;
        doc.tags
            .insert(id.to_string(), (src.to_string(), ScriptStatus::Loading));
        doc.waiting.push((id.to_string(), on_settled));
        Ok(())
    }

    fn watch(&self, id: &str, on_settled: ScriptCallback) -> Result<(), PaymentError> {
        let mut doc = self.inner.borrow_mut();
        if !doc.tags.contains_key(id) {
            return Err(DomError::NotFound(id.to_string()).into());
        }
        doc.waiting.push((id.to_string(), on_settled));
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeProvider {
    available: Rc<Cell<bool>>,
    render_error: Rc<RefCell<Option<String>>>,
    requests: Rc<RefCell<Vec<RenderRequest>>>,
    handlers: Rc<RefCell<Option<SubscriptionHandlers>>>,
    closed: Rc<Cell<usize>>,
}

impl FakeProvider {
    pub fn available() -> Self {
        let provider = Self::default();
        provider.set_available(true);
        provider
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    pub fn fail_render(&self, reason: &str) {
        *self.render_error.borrow_mut() = Some(reason.to_string());
    }

    pub fn render_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<RenderRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn handlers(&self) -> Option<SubscriptionHandlers> {
        self.handlers.borrow().clone()
    }

    pub fn close_count(&self) -> usize {
        self.closed.get()
    }
}

impl PaymentProvider for FakeProvider {
    fn is_available(&self) -> bool {
        self.available.get()
    }

    fn render_buttons(
        &self,
        request: &RenderRequest,
        handlers: SubscriptionHandlers,
    ) -> Result<(), PaymentError> {
        if let Some(reason) = self.render_error.borrow().clone() {
            return Err(PaymentError::Render(reason));
        }
        self.requests.borrow_mut().push(request.clone());
        *self.handlers.borrow_mut() = Some(handlers);
        Ok(())
    }

    fn close_buttons(&self) {
        self.closed.set(self.closed.get() + 1);
    }
}
