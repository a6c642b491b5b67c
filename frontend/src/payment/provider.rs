use super::{flow::SubscriptionHandlers, PaymentError};

/// DOM id of the element the provider renders its buttons into.
pub const BUTTON_CONTAINER_ID: &str = "paypal-button-container";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonStyle {
    pub layout: &'static str,
    pub shape: &'static str,
    pub label: &'static str,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            layout: "vertical",
            shape: "pill",
            label: "subscribe",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub container: String,
    pub style: ButtonStyle,
}

impl RenderRequest {
    pub fn selector(&self) -> String {
        format!("#{}", self.container)
    }
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            container: BUTTON_CONTAINER_ID.to_string(),
            style: ButtonStyle::default(),
        }
    }
}

/// The provider's client library as seen after its script has loaded.
pub trait PaymentProvider {
    fn is_available(&self) -> bool;

    fn render_buttons(
        &self,
        request: &RenderRequest,
        handlers: SubscriptionHandlers,
    ) -> Result<(), PaymentError>;

    /// Closes rendered buttons, if any. Safe to call repeatedly.
    fn close_buttons(&self);
}
