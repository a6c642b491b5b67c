use leptos::*;

pub const STORAGE_KEY: &str = "polyglot.color-mode";
const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ColorMode::Light),
            "dark" => Some(ColorMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn as_class(self) -> &'static str {
        match self {
            ColorMode::Light => "",
            ColorMode::Dark => DARK_CLASS,
        }
    }

    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        stored.and_then(ColorMode::parse).unwrap_or(if system_prefers_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        })
    }
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::{ColorMode, DARK_CLASS, STORAGE_KEY};
    use crate::utils::storage::{document, local_storage, window};

    pub fn initial_mode() -> ColorMode {
        let stored = local_storage()
            .ok()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        let system_dark = window()
            .ok()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|m| m.matches())
            .unwrap_or(false);
        ColorMode::resolve(stored.as_deref(), system_dark)
    }

    pub fn apply(mode: ColorMode) {
        let Some(html) = document().ok().and_then(|d| d.document_element()) else {
            return;
        };
        let list = html.class_list();
        let result = match mode {
            ColorMode::Dark => list.add_1(DARK_CLASS),
            ColorMode::Light => list.remove_1(DARK_CLASS),
        };
        if result.is_err() {
            log::warn!("could not apply color mode {}", mode.as_str());
        }
    }

    pub fn persist(mode: ColorMode) {
        match local_storage() {
            Ok(storage) => {
                let _ = storage.set_item(STORAGE_KEY, mode.as_str());
            }
            Err(err) => log::debug!("color mode not persisted: {}", err),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod dom {
    use super::ColorMode;

    pub fn initial_mode() -> ColorMode {
        ColorMode::Light
    }

    pub fn apply(_mode: ColorMode) {}

    pub fn persist(_mode: ColorMode) {}
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    mode: RwSignal<ColorMode>,
}

impl ThemeState {
    pub fn new(initial: ColorMode) -> Self {
        Self {
            mode: create_rw_signal(initial),
        }
    }

    pub fn current(&self) -> ReadSignal<ColorMode> {
        self.mode.read_only()
    }

    pub fn set_mode(&self, mode: ColorMode) {
        self.mode.set(mode);
        dom::apply(mode);
        dom::persist(mode);
    }

    pub fn toggle(&self) {
        self.set_mode(self.mode.get_untracked().toggled());
    }
}

pub fn provide_theme() -> ThemeState {
    let state = ThemeState::new(dom::initial_mode());
    dom::apply(state.mode.get_untracked());
    provide_context(state);
    state
}

pub fn use_theme() -> ThemeState {
    match use_context::<ThemeState>() {
        Some(state) => state,
        None => provide_theme(),
    }
}
