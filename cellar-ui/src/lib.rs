//! Shared Dioxus components and D3.js bridge for the wine cellar apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js table and bar chart via `js_sys::eval()`,
//!   plus the browser `fetch` used by the network fallback
//! - `sources`: the record sources each app loads from, in order
//! - `storage`: `localStorage`-backed dark-mode preference and theme class
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (filters, summary cards, containers, etc.)
//! - `config`: URLs, DOM ids and theme constants

pub mod components;
pub mod config;
pub mod js_bridge;
pub mod sources;
pub mod state;
pub mod storage;
