//! chirp: a terminal timeline client over an in-memory mock feed.
//!
//! The data layer is a single-writer in-memory store ([`store`]) seeded
//! with fixture data; every view reads snapshots and derives its own
//! projections ([`feed`]). The UI ([`ui`]) follows a Model-View-Intent
//! shape: pure reducers own view state, the app loop executes side
//! effects. There is no server, no persistence, and no network; all
//! state lives and dies with the process.

pub mod cli;
pub mod config;
pub mod feed;
pub mod logging;
pub mod store;
pub mod ui;
