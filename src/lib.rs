//! Client core for a mentor-mentee matching app.
//!
//! Authenticated users register as mentor or mentee, manage a profile,
//! browse mentors, and exchange match requests with an
//! accept/reject/cancel lifecycle. This crate is the state layer behind
//! such a UI: four independent store slices with pure reducers, the REST
//! client that drives them, and the query/validation helpers views need.
//! Rendering and navigation stay outside.
//!
//! The composition root is [`client::MatchClient`]: views invoke its async
//! operations, then re-read slice state through its accessors after each
//! settlement.

pub mod api;
pub mod client;
pub mod config;
pub mod logging;
pub mod mentors;
pub mod models;
pub mod profile;
pub mod requests;
pub mod session;
pub mod store;

pub use client::{ClientError, DecisionOutcome, MatchClient};
pub use config::ClientConfig;
