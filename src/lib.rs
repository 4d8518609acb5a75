pub mod actions;
pub mod auth;
pub mod avatar;
pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod state;
pub mod store;
