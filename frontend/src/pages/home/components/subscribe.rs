use crate::components::subscription::SubscriptionWidget;
use leptos::*;

const PERKS: &[&str] = &[
    "Unlimited access to every course",
    "Two live tutor sessions a month",
    "Offline lessons on mobile",
];

#[component]
pub fn SubscribeSection() -> impl IntoView {
    view! {
        <section id="subscribe" class="bg-surface">
            <div class="max-w-3xl mx-auto py-16 px-4 sm:px-6 lg:px-8 text-center">
                <h2 class="text-3xl font-bold text-fg">"Go unlimited"</h2>
                <p class="mt-2 text-fg-muted">"One monthly plan. Cancel any time."</p>
                <ul class="mt-6 space-y-2 text-sm text-fg">
                    {PERKS
                        .iter()
                        .map(|perk| view! { <li><i class="fas fa-check mr-2 text-status-success-text"></i>{*perk}</li> })
                        .collect_view()}
                </ul>
                <div class="mt-8">
                    <SubscriptionWidget/>
                </div>
            </div>
        </section>
    }
}
