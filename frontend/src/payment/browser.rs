//! `web_sys` implementations of the script registry and the PayPal client
//! library contract.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlScriptElement};

use crate::utils::storage::{document, element_by_id, DomError};

use super::flow::{SubscriptionHandlers, SubscriptionIntent, EMPTY_INTENT_TOKEN};
use super::provider::{PaymentProvider, RenderRequest};
use super::script::{ScriptCallback, ScriptHost, ScriptOutcome, ScriptStatus};
use super::PaymentError;

const STATE_ATTR: &str = "data-load-state";

pub struct DomScriptHost;

impl ScriptHost for DomScriptHost {
    fn status(&self, id: &str) -> ScriptStatus {
        let Some(element) = document().ok().and_then(|d| d.get_element_by_id(id)) else {
            return ScriptStatus::Absent;
        };
        match element.get_attribute(STATE_ATTR).as_deref() {
            Some("loaded") => ScriptStatus::Loaded,
            Some("failed") => ScriptStatus::Failed,
            Some(_) => ScriptStatus::Loading,
            // Tag we did not inject (e.g. static markup): its load event may
            // already have fired, so trust the global instead.
            None if provider_ready() => ScriptStatus::Loaded,
            None => ScriptStatus::Loading,
        }
    }

    fn inject(&self, id: &str, src: &str, on_settled: ScriptCallback) -> Result<(), PaymentError> {
        let document = document()?;
        if document.get_element_by_id(id).is_some() {
            return Err(DomError::Js(format!("script #{} is already present", id)).into());
        }
        let script = document
            .create_element("script")
            .map_err(|e| DomError::js(&e))?
            .dyn_into::<HtmlScriptElement>()
            .map_err(|_| DomError::Js("created element is not a script".into()))?;
        script.set_id(id);
        script.set_src(src);
        script.set_async(true);
        script
            .set_attribute(STATE_ATTR, "loading")
            .map_err(|e| DomError::js(&e))?;
        listen(&script, on_settled)?;

        let parent: Element = match document.head() {
            Some(head) => head.into(),
            None => document.body().ok_or(DomError::NoBody)?.into(),
        };
        parent.append_child(&script).map_err(|e| DomError::js(&e))?;
        log::debug!("injected payment script #{}", id);
        Ok(())
    }

    fn watch(&self, id: &str, on_settled: ScriptCallback) -> Result<(), PaymentError> {
        let element = element_by_id(id)?;
        listen(&element, on_settled)?;
        Ok(())
    }
}

/// Hooks `load` and `error` on `target`; whichever fires first settles the
/// callback and records the result on the element.
fn listen(target: &Element, on_settled: ScriptCallback) -> Result<(), DomError> {
    let pending = Rc::new(RefCell::new(Some(on_settled)));
    for (event, outcome, state) in [
        ("load", ScriptOutcome::Loaded, "loaded"),
        ("error", ScriptOutcome::Failed, "failed"),
    ] {
        let pending = pending.clone();
        let element = target.clone();
        let handler = Closure::once_into_js(move || {
            let _ = element.set_attribute(STATE_ATTR, state);
            let callback = pending.borrow_mut().take();
            if let Some(callback) = callback {
                callback(outcome);
            }
        });
        target
            .add_event_listener_with_callback(event, handler.unchecked_ref())
            .map_err(|e| DomError::js(&e))?;
    }
    Ok(())
}

pub fn describe_js_error(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    Reflect::get(err, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

fn render_error(err: JsValue) -> PaymentError {
    PaymentError::Render(describe_js_error(&err))
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), PaymentError> {
    Reflect::set(target, &key.into(), value).map_err(render_error)?;
    Ok(())
}

fn paypal_global() -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &"paypal".into()).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

fn buttons_factory(paypal: &JsValue) -> Option<Function> {
    Reflect::get(paypal, &"Buttons".into())
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn provider_ready() -> bool {
    paypal_global()
        .and_then(|paypal| buttons_factory(&paypal))
        .is_some()
}

fn create_for_plan(actions: &JsValue, plan_id: &str) -> Result<JsValue, JsValue> {
    let subscription = Reflect::get(actions, &"subscription".into())?;
    let create = Reflect::get(&subscription, &"create".into())?.dyn_into::<Function>()?;
    let payload = Object::new();
    Reflect::set(&payload, &"plan_id".into(), &JsValue::from_str(plan_id))?;
    create.call1(&subscription, &payload)
}

fn button_config(request: &RenderRequest, handlers: SubscriptionHandlers) -> Result<Object, PaymentError> {
    let config = Object::new();

    let style = Object::new();
    set(&style, "layout", &JsValue::from_str(request.style.layout))?;
    set(&style, "shape", &JsValue::from_str(request.style.shape))?;
    set(&style, "label", &JsValue::from_str(request.style.label))?;
    set(&config, "style", &style)?;

    let create = handlers.clone();
    let create_subscription = Closure::<dyn FnMut(JsValue, JsValue) -> JsValue>::new(
        move |_data: JsValue, actions: JsValue| match create.create_subscription() {
            SubscriptionIntent::Unconfigured => JsValue::from_str(EMPTY_INTENT_TOKEN),
            SubscriptionIntent::Plan(plan_id) => match create_for_plan(&actions, &plan_id) {
                Ok(intent) => intent,
                Err(err) => {
                    create.fail(&describe_js_error(&err));
                    JsValue::from_str(EMPTY_INTENT_TOKEN)
                }
            },
        },
    );
    set(&config, "createSubscription", &create_subscription.into_js_value())?;

    let approve = handlers.clone();
    let on_approve = Closure::<dyn FnMut(JsValue)>::new(move |data: JsValue| {
        let subscription_id = Reflect::get(&data, &"subscriptionID".into())
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        approve.approve(&subscription_id);
    });
    set(&config, "onApprove", &on_approve.into_js_value())?;

    let on_error = Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
        handlers.fail(&describe_js_error(&err));
    });
    set(&config, "onError", &on_error.into_js_value())?;

    Ok(config)
}

/// Bridge to `window.paypal`. Holds the buttons handle so it can be closed
/// when the widget unmounts.
#[derive(Default)]
pub struct PaypalSdk {
    buttons: RefCell<Option<JsValue>>,
}

impl PaymentProvider for PaypalSdk {
    fn is_available(&self) -> bool {
        provider_ready()
    }

    fn render_buttons(
        &self,
        request: &RenderRequest,
        handlers: SubscriptionHandlers,
    ) -> Result<(), PaymentError> {
        let paypal = paypal_global().ok_or(PaymentError::ProviderUnavailable)?;
        let factory = buttons_factory(&paypal).ok_or(PaymentError::ProviderUnavailable)?;
        element_by_id(&request.container)?;

        let config = button_config(request, handlers)?;
        let buttons = factory.call1(&paypal, &config).map_err(render_error)?;
        let render = Reflect::get(&buttons, &"render".into())
            .map_err(render_error)?
            .dyn_into::<Function>()
            .map_err(|_| PaymentError::Render("buttons handle has no render()".into()))?;
        let rendered = render
            .call1(&buttons, &JsValue::from_str(&request.selector()))
            .map_err(render_error)?;

        if let Ok(promise) = rendered.dyn_into::<js_sys::Promise>() {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    log::error!("payment buttons rejected render: {}", describe_js_error(&err));
                }
            });
        }
        *self.buttons.borrow_mut() = Some(buttons);
        Ok(())
    }

    fn close_buttons(&self) {
        let Some(buttons) = self.buttons.borrow_mut().take() else {
            return;
        };
        let close = Reflect::get(&buttons, &"close".into()).and_then(|c| c.dyn_into::<Function>());
        if let Ok(close) = close {
            if let Err(err) = close.call0(&buttons) {
                log::debug!("closing payment buttons failed: {}", describe_js_error(&err));
            }
        }
    }
}
