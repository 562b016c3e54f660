//! # Libris Web Server Library
//!
//! This library provides the core functionality for the Libris catalog
//! server: server-rendered pages for browsing books and adding authors
//! and books.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `forms`: Submitted form fields and validation outcomes
//! - `middleware`: Security headers
//! - `routes`: Route handlers
//! - `views`: HTML rendering

pub mod app;
pub mod config;
pub mod error;
pub mod forms;
pub mod middleware;
pub mod routes;
pub mod views;
