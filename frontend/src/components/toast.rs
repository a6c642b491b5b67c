use crate::state::notifications::{use_notifications, Notification, NotificationKind};
use leptos::*;

fn icon_for(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "fas fa-check-circle",
        NotificationKind::Warning => "fas fa-exclamation-triangle",
        NotificationKind::Error => "fas fa-exclamation-circle",
    }
}

#[component]
fn Toast(notification: Notification, on_close: Callback<u64>) -> impl IntoView {
    let id = notification.id;
    let role = if notification.kind == NotificationKind::Error {
        "alert"
    } else {
        "status"
    };
    let class = format!(
        "pointer-events-auto w-full max-w-sm border px-4 py-3 rounded shadow-lg {}",
        notification.kind.as_class()
    );

    view! {
        <div class=class role=role data-toast-id=id.to_string()>
            <div class="flex items-start gap-3">
                <i class=icon_for(notification.kind)></i>
                <div class="flex-1">
                    <p class="font-semibold">{notification.title}</p>
                    <p class="text-sm mt-1">{notification.description}</p>
                </div>
                <button
                    type="button"
                    aria-label="Dismiss notification"
                    class="opacity-70 hover:opacity-100"
                    on:click=move |_| on_close.call(id)
                >
                    {"✕"}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn ToastRegion() -> impl IntoView {
    let center = use_notifications();
    let items = center.items();
    let on_close = Callback::new(move |id: u64| center.dismiss(id));

    view! {
        <div
            aria-live="polite"
            class="pointer-events-none fixed inset-x-0 bottom-0 z-[80] flex flex-col items-center gap-2 p-4 sm:items-end"
        >
            <For
                each=move || items.get()
                key=|n| n.id
                children=move |notification| view! { <Toast notification=notification on_close=on_close /> }
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::notifications::provide_notifications;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn region_renders_each_notification() {
        let html = render_to_string(move || {
            let center = provide_notifications();
            center.push(Notification::success("Subscription approved", "SUB-123 is active"));
            center.push(Notification::error("Payment error", "network timeout"));
            view! { <ToastRegion /> }
        });
        assert!(html.contains("Subscription approved"));
        assert!(html.contains("SUB-123 is active"));
        assert!(html.contains("network timeout"));
        assert!(html.contains("role=\"alert\""));
    }

    #[test]
    fn empty_region_has_no_toasts() {
        let html = render_to_string(move || {
            provide_notifications();
            view! { <ToastRegion /> }
        });
        assert!(!html.contains("data-toast-id"));
    }
}
