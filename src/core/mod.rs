//! # Core Application Logic
//!
//! This module contains Folio's catalog logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • listing (filter/page)│
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │    API     │
//!             │  Adapter   │          │  (reqwest) │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all catalog state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`listing`]: Filter and pagination over the fetched snapshot
//! - [`route`]: Views and navigation targets
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod listing;
pub mod route;
pub mod state;
