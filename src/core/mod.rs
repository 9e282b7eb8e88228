//! # Core Application Logic
//!
//! This module contains Jotter's business logic.
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
//!                    │  • Storage (key-value)  │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`note`]: The `Note` record and its `NoteId`
//! - [`collection`]: Pure whole-collection transformations
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum, everything that can happen in the app
//! - [`storage`]: Key-value persistence of the collection
//! - [`config`]: Settings and their resolution order

pub mod action;
pub mod collection;
pub mod config;
pub mod note;
pub mod state;
pub mod storage;
