//! HTTP request handlers

pub mod breach;
pub mod contact;
pub mod content;
pub mod health;
pub mod marketing;
pub mod scan;
