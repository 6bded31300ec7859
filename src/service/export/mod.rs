//! Deck export exchange
//!
//! Sends the final ordered (title, lyrics) list and receives either the
//! generated document or the location of one.

pub mod dto;
mod adapter;
mod client;

pub use client::ExportClient;
