//! Subscription widget: loads the PayPal SDK once per page and turns its
//! callbacks into notifications.

pub mod browser;
pub mod controller;
mod error;
pub mod flow;
pub mod provider;
pub mod script;
pub mod widget;

pub use controller::WidgetController;
pub use error::PaymentError;
pub use flow::{SubscriptionFlow, SubscriptionHandlers, SubscriptionIntent, EMPTY_INTENT_TOKEN};
pub use provider::{ButtonStyle, PaymentProvider, RenderRequest, BUTTON_CONTAINER_ID};
pub use script::{ScriptHost, ScriptOutcome, ScriptStatus, SDK_SCRIPT_ID};
pub use widget::{WidgetSettings, WidgetState};

#[cfg(test)]
pub mod test_support;
