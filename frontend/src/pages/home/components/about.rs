use leptos::*;

const PILLARS: &[(&str, &str, &str)] = &[
    ("fas fa-clock", "Fifteen minutes a day", "Short lessons that fit between meetings and commutes."),
    ("fas fa-comments", "Real conversations", "Practice speaking with native tutors from week one."),
    ("fas fa-chart-line", "Visible progress", "Track vocabulary and streaks as they grow."),
];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="bg-surface-muted">
            <div class="max-w-7xl mx-auto py-16 px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold text-fg text-center">"Why learners stay"</h2>
                <div class="mt-10 grid grid-cols-1 gap-8 md:grid-cols-3">
                    {PILLARS
                        .iter()
                        .map(|(icon, title, body)| {
                            view! {
                                <div class="bg-surface-elevated rounded-lg shadow p-6">
                                    <i class=format!("{} text-2xl text-action-primary-bg", icon)></i>
                                    <h3 class="mt-4 text-lg font-semibold text-fg">{*title}</h3>
                                    <p class="mt-2 text-sm text-fg-muted">{*body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
