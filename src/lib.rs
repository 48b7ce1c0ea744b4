//! CI log classification and webhook notification.
//!
//! One run of the tool acquires a captured job log, classifies it with a
//! fixed keyword heuristic and delivers a JSON notification payload to a
//! configured webhook endpoint.

pub mod acquire;
pub mod classify;
pub mod config;
pub mod context;
pub mod model;
pub mod run;
pub mod webhook;
