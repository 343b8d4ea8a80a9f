pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod models;
pub mod pages;
pub mod routes;
