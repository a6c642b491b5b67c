use crate::components::{theme::ColorModeToggle, toast::ToastRegion};
use crate::content::{NavItem, NAV_ITEMS, SITE_NAME};
use crate::utils::scroll::{scroll_to_section, section_href};
use leptos::{ev::MouseEvent, *};

fn go_to(section: &'static str, ev: MouseEvent) {
    ev.prevent_default();
    if let Err(err) = scroll_to_section(section) {
        log::debug!("scroll to {} skipped: {}", section, err);
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    let desktop_link = |item: &'static NavItem| {
        view! {
            <a
                href=section_href(item.section)
                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                on:click=move |ev| go_to(item.section, ev)
            >
                {item.label}
            </a>
        }
    };
    let mobile_link = move |item: &'static NavItem| {
        view! {
            <a
                href=section_href(item.section)
                class="block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                on:click=move |ev| {
                    set_menu_open.set(false);
                    go_to(item.section, ev);
                }
            >
                {item.label}
            </a>
        }
    };

    view! {
        <header class="sticky top-0 z-50 bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="#top" class="text-xl font-semibold text-fg" on:click=move |ev| go_to("top", ev)>
                        {SITE_NAME}
                    </a>
                    <div class="flex items-center gap-2">
                        <nav class="hidden lg:flex space-x-4">
                            {NAV_ITEMS.iter().map(desktop_link).collect_view()}
                        </nav>
                        <ColorModeToggle/>
                        <a
                            href=section_href("subscribe")
                            class="hidden lg:inline-flex items-center px-4 py-2 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
                            on:click=move |ev| go_to("subscribe", ev)
                        >
                            "Start learning"
                        </a>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get().to_string()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg
                                class="h-6 w-6"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <Show
                                    when=move || menu_open.get()
                                    fallback=move || {
                                        view! {
                                            <path
                                                stroke-linecap="round"
                                                stroke-linejoin="round"
                                                stroke-width="2"
                                                d="M4 6h16M4 12h16M4 18h16"
                                            />
                                        }
                                    }
                                >
                                    <path
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                        stroke-width="2"
                                        d="M6 18L18 6M6 6l12 12"
                                    />
                                </Show>
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {NAV_ITEMS.iter().map(mobile_link).collect_view()}
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-border bg-surface-elevated">
            <div class="max-w-7xl mx-auto py-8 px-4 sm:px-6 lg:px-8 flex flex-col gap-4 sm:flex-row sm:justify-between">
                <p class="text-sm text-fg-muted">{format!("© {}. Learn a language, one lesson a day.", SITE_NAME)}</p>
                <nav class="flex gap-4 text-sm">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a href=section_href(item.section) class="text-fg-muted hover:text-fg">
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </footer>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div id="top" class="min-h-screen bg-surface text-fg">
            <Navbar/>
            <main>{children()}</main>
            <Footer/>
            <ToastRegion/>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn navbar_links_every_section() {
        let html = render_to_string(move || view! { <Navbar /> });
        for item in NAV_ITEMS {
            assert!(html.contains(item.label), "missing {}", item.label);
            assert!(html.contains(&format!("href=\"#{}\"", item.section)));
        }
        assert!(html.contains("Toggle color mode"));
    }

    #[test]
    fn mobile_drawer_starts_closed() {
        let html = render_to_string(move || view! { <Navbar /> });
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("Open menu"));
        assert!(!html.contains("id=\"mobile-nav\""));
    }

    #[test]
    fn layout_renders_children_and_footer() {
        let html = render_to_string(move || {
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("<footer"));
        assert!(html.contains("aria-live=\"polite\""));
    }

    #[test]
    fn spinner_renders() {
        let html = render_to_string(move || view! { <LoadingSpinner /> });
        assert!(html.contains("animate-spin"));
    }
}
