//! Integration test crate for TwinView.
//!
//! This crate exists solely to hold cross-crate integration tests. They
//! drive the transport with real `ClipPlayer`s on a manual clock, so
//! playback timing is deterministic.

#[cfg(test)]
mod harness;

#[cfg(test)]
mod transport;

#[cfg(test)]
mod marks;

#[cfg(test)]
mod loading;
