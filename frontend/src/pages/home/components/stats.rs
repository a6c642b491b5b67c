use crate::content::{INTRO_VIDEO_URL, STATS};
use leptos::*;

#[component]
pub fn StatsSection() -> impl IntoView {
    view! {
        <section id="stats" class="bg-surface-muted">
            <div class="max-w-7xl mx-auto py-16 px-4 sm:px-6 lg:px-8 grid grid-cols-1 gap-10 lg:grid-cols-2 lg:items-center">
                <dl class="grid grid-cols-2 gap-6">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="bg-surface-elevated rounded-lg shadow p-6 text-center">
                                    <dt class="text-sm text-fg-muted">{stat.label}</dt>
                                    <dd class="mt-1 text-3xl font-extrabold text-fg">{stat.value}</dd>
                                </div>
                            }
                        })
                        .collect_view()}
                </dl>
                <div class="aspect-video w-full overflow-hidden rounded-lg shadow">
                    <iframe
                        class="h-full w-full"
                        src=INTRO_VIDEO_URL
                        title="How a lesson works"
                        loading="lazy"
                        allow="accelerometer; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen=true
                    ></iframe>
                </div>
            </div>
        </section>
    }
}
