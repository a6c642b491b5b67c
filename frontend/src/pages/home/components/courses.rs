use crate::content::{Course, COURSES};
use leptos::*;

#[component]
pub fn CourseCard(course: &'static Course) -> impl IntoView {
    view! {
        <article class="bg-surface-elevated overflow-hidden shadow rounded-lg flex flex-col" data-course=course.slug>
            <img src=course.image alt=format!("{} course", course.language) class="h-40 w-full object-cover" loading="lazy"/>
            <div class="p-5 flex-1 flex flex-col">
                <div class="flex items-center justify-between text-xs text-fg-muted">
                    <span>{course.language}</span>
                    <span class="rounded-full border border-border px-2 py-0.5">{course.level.label()}</span>
                </div>
                <h3 class="mt-2 text-lg font-semibold text-fg">{course.title}</h3>
                <p class="mt-2 text-sm text-fg-muted flex-1">{course.blurb}</p>
                <p class="mt-4 text-sm font-medium text-fg">{format!("{} lessons", course.lessons)}</p>
            </div>
        </article>
    }
}

#[component]
pub fn CourseGallery() -> impl IntoView {
    view! {
        <section id="courses" class="bg-surface">
            <div class="max-w-7xl mx-auto py-16 px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold text-fg">"Courses"</h2>
                <p class="mt-2 text-fg-muted">"Pick a language and start today."</p>
                <div class="mt-8 grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-4">
                    {COURSES.iter().map(|course| view! { <CourseCard course=course/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
