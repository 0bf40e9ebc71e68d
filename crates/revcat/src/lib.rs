//! HTTP service exposing fetch-and-combine on `GET /getUrlContents`.
//!
//! - [`config`]: listener settings from flags and environment
//! - [`server`]: axum routing and process lifecycle

pub mod config;
pub mod server;

pub use config::Config;
pub use server::{CONTENTS_ROUTE, DEFAULT_LOCATORS, router, serve};
