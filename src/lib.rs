//! PSI Ranker - Multi-criteria decision support with the Preference
//! Selection Index.
//!
//! Scores a set of alternatives against weighted Benefit/Cost criteria,
//! derives criterion weights from the data itself, and ranks the
//! alternatives by their PSI value.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
