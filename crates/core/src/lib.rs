#![forbid(unsafe_code)]

pub mod model;
pub mod tracker;

pub use tracker::Tracker;
