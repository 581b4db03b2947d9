//! Logical core of the AI interview playground: curated question and
//! scenario tables, the filter/navigation state machines that walk them, and
//! the rubric weight aggregator.

pub mod config;
pub mod content;
pub mod error;
pub mod playground;
pub mod telemetry;
