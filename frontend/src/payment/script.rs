use crate::config::{ClientId, PAYPAL_SDK_ORIGIN};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::PaymentError;

/// Reserved id of the SDK `<script>` tag. At most one element carries it.
pub const SDK_SCRIPT_ID: &str = "paypal-sdk";

const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>');

pub fn sdk_url(origin: &str, client_id: &ClientId) -> String {
    format!(
        "{}/sdk/js?client-id={}&components=buttons&vault=true&intent=subscription",
        origin.trim_end_matches('/'),
        utf8_percent_encode(client_id.as_str(), QUERY_VALUE)
    )
}

pub fn default_sdk_url(client_id: &ClientId) -> String {
    sdk_url(PAYPAL_SDK_ORIGIN, client_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStatus {
    Absent,
    Loading,
    Loaded,
    /// The tag exists but its download failed. Not retried within a session.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptOutcome {
    Loaded,
    Failed,
}

pub type ScriptCallback = Box<dyn FnOnce(ScriptOutcome)>;

/// Page-wide registry of injected script tags, keyed by element id.
pub trait ScriptHost {
    fn status(&self, id: &str) -> ScriptStatus;

    /// Inserts a tag with `id` and `src`. Implementations must refuse to
    /// insert when a tag with `id` already exists.
    fn inject(&self, id: &str, src: &str, on_settled: ScriptCallback) -> Result<(), PaymentError>;

    /// Waits on a tag that is present but has not finished loading.
    fn watch(&self, id: &str, on_settled: ScriptCallback) -> Result<(), PaymentError>;
}
