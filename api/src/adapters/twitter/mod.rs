//! Twitter adapter
//!
//! Implementation of the timeline source port against the Twitter v1.1 API.

pub mod client;

pub use client::{Credentials, TwitterTimeline};
