pub mod notifications;
pub mod theme;
