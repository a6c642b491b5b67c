pub mod layout;
pub mod subscription;
pub mod theme;
pub mod toast;
