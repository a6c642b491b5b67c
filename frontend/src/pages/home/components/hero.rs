use crate::content::SITE_NAME;
use crate::utils::scroll::{scroll_to_section, section_href};
use leptos::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    let browse = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        if let Err(err) = scroll_to_section("courses") {
            log::debug!("scroll to courses skipped: {}", err);
        }
    };

    view! {
        <section class="bg-surface">
            <div class="max-w-7xl mx-auto py-16 px-4 sm:px-6 lg:px-8 text-center">
                <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                    "Speak a new language with confidence"
                </h1>
                <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                    {format!("{} pairs bite-sized daily lessons with live practice so you remember what you learn.", SITE_NAME)}
                </p>
                <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center lg:mt-8">
                    <div class="rounded-md shadow">
                        <a
                            href=section_href("courses")
                            on:click=browse
                            class="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover lg:py-4 lg:text-lg lg:px-10"
                        >
                            "Browse courses"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
