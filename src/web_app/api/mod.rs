// web_app/api/mod.rs - Server-side data access (ssr only)

pub mod auth;
pub mod db;
pub mod store;
