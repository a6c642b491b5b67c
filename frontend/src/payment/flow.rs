use std::rc::Rc;

use crate::state::notifications::{Notification, Notifier};

/// Token handed back to the provider when no subscription can be created.
pub const EMPTY_INTENT_TOKEN: &str = "";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionIntent {
    /// No plan id is wired in; the provider receives [`EMPTY_INTENT_TOKEN`].
    Unconfigured,
    Plan(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionFlow {
    plan_id: Option<String>,
}

impl SubscriptionFlow {
    pub fn new(plan_id: Option<String>) -> Self {
        Self {
            plan_id: plan_id.filter(|p| !p.trim().is_empty()),
        }
    }

    pub fn plan_id(&self) -> Option<&str> {
        self.plan_id.as_deref()
    }
}

/// Callbacks the provider invokes once its buttons are on the page.
#[derive(Clone)]
pub struct SubscriptionHandlers {
    flow: SubscriptionFlow,
    notifier: Rc<dyn Notifier>,
}

impl SubscriptionHandlers {
    pub fn new(flow: SubscriptionFlow, notifier: Rc<dyn Notifier>) -> Self {
        Self { flow, notifier }
    }

    pub fn create_subscription(&self) -> SubscriptionIntent {
        match self.flow.plan_id() {
            Some(plan) => {
                log::debug!("creating subscription for plan {}", plan);
                SubscriptionIntent::Plan(plan.to_string())
            }
            None => {
                self.notifier.notify(Notification::warning(
                    "Plan not configured",
                    "Subscriptions are not available yet. Please check back soon.",
                ));
                SubscriptionIntent::Unconfigured
            }
        }
    }

    pub fn approve(&self, subscription_id: &str) {
        self.notifier.notify(Notification::success(
            "Subscription approved",
            format!("Your subscription {} is now active.", subscription_id),
        ));
    }

    pub fn fail(&self, message: &str) {
        self.notifier
            .notify(Notification::error("Payment error", message.to_string()));
    }
}
