//! Tests for webserver services

pub mod word_store;
