//! HTTP handlers

pub mod contact;
pub mod debug;
pub mod health;
pub mod pages;
