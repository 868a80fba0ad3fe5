//! Value Object Module

pub mod bookmark_title;
pub mod bookmark_url;
