//! Entity Module

pub mod bookmark;
