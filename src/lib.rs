//! Flizzweb showcase library
//!
//! This library provides the pieces of the Flizzweb terminal showcase: the
//! content registry, the scroll and hover animation engine, the page sections
//! and the headless commands.

// Module declarations
pub mod animation;
pub mod assets;
pub mod cli;
pub mod config;
pub mod constants;
pub mod content;
pub mod logging;
pub mod models;
pub mod services;
pub mod shortcuts;
pub mod tui;
