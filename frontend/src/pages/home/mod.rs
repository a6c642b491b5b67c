pub mod components;
pub mod panel;

pub use panel::HomePage;
