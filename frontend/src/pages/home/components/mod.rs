pub mod about;
pub mod courses;
pub mod hero;
pub mod stats;
pub mod subscribe;
