use crate::state::theme::{use_theme, ColorMode};
use leptos::*;

#[component]
pub fn ColorModeToggle() -> impl IntoView {
    let theme_state = use_theme();
    let current = theme_state.current();

    let on_click = move |_| {
        theme_state.toggle();
    };

    view! {
        <button
            type="button"
            class="relative inline-flex h-6 w-11 items-center rounded-full bg-gray-200 dark:bg-gray-700 transition-colors focus:outline-none focus:ring-2 focus:ring-primary-500 focus:ring-offset-2"
            on:click=on_click
            aria-label="Toggle color mode"
            aria-pressed=move || (current.get() == ColorMode::Dark).to_string()
        >
            <span class="sr-only">"Toggle color mode"</span>

            <span
                class=move || {
                    if current.get() == ColorMode::Dark {
                        "inline-block h-4 w-4 transform rounded-full transition-transform shadow-theme-switch translate-x-6 bg-primary-600"
                    } else {
                        "inline-block h-4 w-4 transform rounded-full transition-transform shadow-theme-switch translate-x-1 bg-white"
                    }
                }
            />

            <span
                class=move || {
                    if current.get() == ColorMode::Dark {
                        "absolute left-1 top-1/2 -translate-y-1/2 text-xs text-gray-400 transition-opacity opacity-100"
                    } else {
                        "absolute left-1 top-1/2 -translate-y-1/2 text-xs text-gray-400 transition-opacity opacity-0"
                    }
                }
            >
                <i class="fas fa-moon"></i>
            </span>

            <span
                class=move || {
                    if current.get() == ColorMode::Light {
                        "absolute right-1 top-1/2 -translate-y-1/2 text-xs text-yellow-500 transition-opacity opacity-100"
                    } else {
                        "absolute right-1 top-1/2 -translate-y-1/2 text-xs text-yellow-500 transition-opacity opacity-0"
                    }
                }
            >
                <i class="fas fa-sun"></i>
            </span>
        </button>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::theme::ThemeState;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn toggle_reflects_dark_mode() {
        let html = render_to_string(move || {
            let state = ThemeState::new(ColorMode::Dark);
            provide_context(state);
            view! { <ColorModeToggle /> }
        });
        assert!(html.contains("Toggle color mode"));
        assert!(html.contains("aria-pressed=\"true\""));
        assert!(html.contains("translate-x-6"));
    }
}
