//! # IO Module
//!
//! Adapter layer between the calendar UI and the domain logic. Translates JSON
//! requests into domain calls and domain results or refusals into HTTP
//! responses. Contains no booking rules of its own.

pub mod rest;
