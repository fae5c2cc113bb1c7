//! InnerBloom wellness companion core.
//!
//! The library behind the peer-support app's wellness dashboard: a
//! keyword-matched chat responder, an in-memory wellness journal with 7-day
//! trend aggregation, the simulated stress scan, mock intern credential
//! management, and the persisted avatar preference. All computation is pure
//! and synchronous; presentation delays and rendering belong to callers.

pub mod charts;
pub mod chat;
pub mod interns;
pub mod journal;
pub mod profile;
pub mod stress;

pub use chat::reply;
