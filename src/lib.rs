//! Server-rendered to-do list: axum handlers over a service façade over a
//! SQLite-backed task store.

pub mod application;
pub mod domain;
pub mod http;
pub mod infrastructure;
