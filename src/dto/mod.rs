//! Request and response payloads for the JSON API.
//!
//! Requests derive `validator::Validate`; routes validate before touching
//! the repository and map failures to the common error envelope.

pub mod account;
pub mod board;
pub mod chat;
pub mod cms;
pub mod custom_schema;
pub mod document;
pub mod lead;
pub mod message;
pub mod opportunity;
pub mod outreach;
pub mod plan;
pub mod quote;
pub mod team;
pub mod theme;
