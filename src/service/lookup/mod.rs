//! Lyrics lookup exchange
//!
//! Sends the queued titles in one request and receives lyrics plus an
//! optional source page per resolved title.

pub mod dto;
mod adapter;
mod client;

pub use client::LookupClient;
