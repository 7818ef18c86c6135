pub mod render;
pub mod routes;
pub mod routing;
pub mod types;
