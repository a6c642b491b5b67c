use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    content::SITE_NAME,
    pages::{home::HomePage, not_found::NotFoundPage},
    state::{notifications::provide_notifications, theme::provide_theme},
};

pub const HOME_PATH: &str = "/";
pub const NOT_FOUND_PATH: &str = "/*any";

/// Every path registered in [`app_root`], in declaration order.
pub const ROUTE_PATHS: &[&str] = &[HOME_PATH, NOT_FOUND_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_theme();
    provide_notifications();
    view! {
        <Title text=SITE_NAME/>
        <Router>
            <Routes>
                <Route path=HOME_PATH view=HomePage/>
                <Route path=NOT_FOUND_PATH view=NotFoundPage/>
            </Routes>
        </Router>
    }
}
