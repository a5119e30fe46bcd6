//! HTTP request handlers

pub mod api;
