//! Helpers for scripting congestion-control experiments.
//!
//! `ranker` pulls the best runs out of a results log, `templater` renders
//! parameterized files from a `^`-placeholder template. The `app` layer wires
//! both to their command-line front ends.

pub mod app;
pub mod ranker;
pub mod templater;
