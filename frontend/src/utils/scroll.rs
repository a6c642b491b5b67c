use crate::utils::storage::{element_by_id, DomError};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Strips a leading `#` so both `"#courses"` and `"courses"` resolve to the
/// same element id.
pub fn section_id(target: &str) -> &str {
    target.trim().trim_start_matches('#')
}

pub fn section_href(id: &str) -> String {
    format!("#{}", section_id(id))
}

pub fn scroll_to_section(target: &str) -> Result<(), DomError> {
    let element = element_by_id(section_id(target))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}
