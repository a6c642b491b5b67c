use super::components::{
    about::AboutSection, courses::CourseGallery, hero::HeroSection, stats::StatsSection,
    subscribe::SubscribeSection,
};
use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout>
            <HeroSection/>
            <AboutSection/>
            <CourseGallery/>
            <StatsSection/>
            <SubscribeSection/>
        </Layout>
    }
}
