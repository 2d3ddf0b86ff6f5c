//! HTTP request handlers for the listing API endpoints

pub mod items;
pub mod statistics;
