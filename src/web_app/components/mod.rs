// web_app/components/mod.rs - UI component modules

pub mod common;
pub mod enquiry;
pub mod gallery;
pub mod sections;
