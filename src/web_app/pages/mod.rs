// web_app/pages/mod.rs - Page-level components

pub mod admin;
pub mod home;
pub mod login;
