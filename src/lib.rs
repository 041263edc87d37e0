//! Blog platform: HTTP API server plus a headless client for the editor
//! workflow. The `blog_api` binary serves the API; `blogctl` drives it.

pub mod auth;
pub mod blogs;
pub mod client;
pub mod common;
pub mod services;
