use std::rc::Rc;

use crate::components::layout::LoadingSpinner;
use crate::config;
use crate::payment::{
    browser::{DomScriptHost, PaypalSdk},
    SubscriptionFlow, WidgetController, WidgetSettings, WidgetState, BUTTON_CONTAINER_ID,
};
use crate::state::notifications::use_notifications;
use leptos::*;

fn status_message(state: WidgetState) -> Option<&'static str> {
    match state {
        WidgetState::Failed => Some("Online payments are unavailable right now. Please try again later."),
        _ => None,
    }
}

/// Hosts the provider's subscribe buttons. The SDK script is injected on the
/// first client-side mount and reused by every later mount.
#[component]
pub fn SubscriptionWidget() -> impl IntoView {
    let notifications = use_notifications();
    let status = create_rw_signal(WidgetState::Unmounted);

    let runtime_config = config::current();
    let controller = WidgetController::new(
        DomScriptHost,
        PaypalSdk::default(),
        Rc::new(notifications),
        WidgetSettings::from_config(&runtime_config),
        SubscriptionFlow::new(runtime_config.plan_id()),
    );
    controller.observe(move |state| status.set(state));

    let mounted = controller.clone();
    create_effect(move |_| mounted.mount());
    on_cleanup(move || controller.unmount());

    view! {
        <div class="w-full max-w-md mx-auto">
            <Show when=move || status.get().is_busy()>
                <LoadingSpinner/>
            </Show>
            {move || {
                status_message(status.get()).map(|message| {
                    view! {
                        <p class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded text-sm">
                            {message}
                        </p>
                    }
                })
            }}
            <div id=BUTTON_CONTAINER_ID class="min-h-[3rem]"></div>
        </div>
    }
}
