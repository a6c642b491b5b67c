use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders `view` on the host with the contexts the app root normally
/// provides (document metadata).
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| {
        leptos_meta::provide_meta_context();
        view().into_view().render_to_string().to_string()
    });
    leptos_reactive::suppress_resource_load(false);
    html
}
