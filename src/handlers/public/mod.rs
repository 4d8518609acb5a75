pub mod auth;
pub mod avatar;
pub mod jobs;
