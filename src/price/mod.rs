pub mod handler;
pub mod model;
pub mod providers;
pub mod routes;
pub mod service;
