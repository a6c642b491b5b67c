use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::state::notifications::Notifier;

use super::flow::{SubscriptionFlow, SubscriptionHandlers};
use super::provider::PaymentProvider;
use super::script::{ScriptCallback, ScriptHost, ScriptOutcome};
use super::widget::{transition, WidgetCommand, WidgetEvent, WidgetSettings, WidgetState};

/// Drives [`transition`] against a real (or fake) document and provider.
///
/// Every mount and unmount bumps a generation counter. Script callbacks
/// capture the generation they were registered under and are dropped when it
/// no longer matches, so a load that finishes after the widget was torn down
/// never renders into a detached container.
pub struct WidgetController {
    host: Box<dyn ScriptHost>,
    provider: Rc<dyn PaymentProvider>,
    notifier: Rc<dyn Notifier>,
    settings: WidgetSettings,
    flow: SubscriptionFlow,
    state: Cell<WidgetState>,
    generation: Cell<u64>,
    observer: RefCell<Option<Box<dyn Fn(WidgetState)>>>,
}

impl WidgetController {
    pub fn new(
        host: impl ScriptHost + 'static,
        provider: impl PaymentProvider + 'static,
        notifier: Rc<dyn Notifier>,
        settings: WidgetSettings,
        flow: SubscriptionFlow,
    ) -> Rc<Self> {
        Rc::new(Self {
            host: Box::new(host),
            provider: Rc::new(provider),
            notifier,
            settings,
            flow,
            state: Cell::new(WidgetState::Unmounted),
            generation: Cell::new(0),
            observer: RefCell::new(None),
        })
    }

    /// Registers a listener that sees every state change.
    pub fn observe(&self, observer: impl Fn(WidgetState) + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
    }

    pub fn state(&self) -> WidgetState {
        self.state.get()
    }

    /// Starts the widget. Repeated calls while already mounted are no-ops so
    /// the pending script callback stays valid.
    pub fn mount(self: &Rc<Self>) {
        let current = self.state.get();
        if current != WidgetState::Unmounted {
            log::debug!("subscription widget already mounted ({:?})", current);
            return;
        }
        self.generation.set(self.generation.get() + 1);
        let script = self.host.status(&self.settings.script_id);
        self.dispatch(WidgetEvent::Mount { script });
    }

    pub fn unmount(self: &Rc<Self>) {
        self.generation.set(self.generation.get() + 1);
        self.dispatch(WidgetEvent::Unmount);
    }

    fn dispatch(self: &Rc<Self>, event: WidgetEvent) {
        let current = self.state.get();
        let step = transition(current, &event, &self.settings);
        if step.state == current && step.commands.is_empty() {
            log::debug!("subscription widget ignored {:?} in {:?}", event, current);
        } else {
            log::debug!("subscription widget {:?} -> {:?}", current, step.state);
        }
        self.state.set(step.state);
        if step.state != current {
            if let Some(observer) = self.observer.borrow().as_ref() {
                observer(step.state);
            }
        }
        for notification in step.notifications {
            self.notifier.notify(notification);
        }
        for command in step.commands {
            self.execute(command);
        }
    }

    fn execute(self: &Rc<Self>, command: WidgetCommand) {
        match command {
            WidgetCommand::InjectScript { id, src } => {
                if let Err(err) = self.host.inject(&id, &src, self.script_callback()) {
                    log::error!("failed to inject payment script: {}", err);
                    self.settle(ScriptOutcome::Failed);
                }
            }
            WidgetCommand::WatchScript { id } => {
                if let Err(err) = self.host.watch(&id, self.script_callback()) {
                    log::error!("failed to watch payment script: {}", err);
                    self.settle(ScriptOutcome::Failed);
                }
            }
            WidgetCommand::CheckProvider => self.settle(ScriptOutcome::Loaded),
            WidgetCommand::RenderButtons(request) => {
                let handlers = SubscriptionHandlers::new(self.flow.clone(), self.notifier.clone());
                match self.provider.render_buttons(&request, handlers) {
                    Ok(()) => self.dispatch(WidgetEvent::Rendered),
                    Err(err) => self.dispatch(WidgetEvent::RenderFailed(err.to_string())),
                }
            }
            WidgetCommand::CloseButtons => self.provider.close_buttons(),
        }
    }

    fn settle(self: &Rc<Self>, outcome: ScriptOutcome) {
        let provider_available = outcome == ScriptOutcome::Loaded && self.provider.is_available();
        self.dispatch(WidgetEvent::ScriptSettled {
            outcome,
            provider_available,
        });
    }

    fn script_callback(self: &Rc<Self>) -> ScriptCallback {
        let controller = Rc::downgrade(self);
        let generation = self.generation.get();
        Box::new(move |outcome| {
            let Some(controller) = controller.upgrade() else {
                return;
            };
            if controller.generation.get() != generation {
                log::debug!("dropping payment script callback from an earlier mount");
                return;
            }
            controller.settle(outcome);
        })
    }
}
