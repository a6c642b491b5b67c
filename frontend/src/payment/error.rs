use crate::utils::storage::DomError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error("payment SDK is not available on window")]
    ProviderUnavailable,
    #[error("payment buttons could not be rendered: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_errors_pass_through() {
        let err: PaymentError = DomError::NotFound("paypal-button-container".into()).into();
        assert_eq!(err.to_string(), "element #paypal-button-container not found");
    }
}
