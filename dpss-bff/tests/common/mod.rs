//! Shared test support for dpss-bff

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
