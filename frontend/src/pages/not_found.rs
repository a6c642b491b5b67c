use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="max-w-3xl mx-auto py-24 px-4 text-center">
                <h1 class="text-3xl font-bold text-fg">"Page not found"</h1>
                <a href="/" class="mt-6 inline-block text-action-primary-bg hover:underline">"Back to home"</a>
            </div>
        </Layout>
    }
}
