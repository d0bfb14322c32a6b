pub mod account;
pub mod activity;
pub mod auth;
pub mod board;
pub mod chat;
pub mod cms;
pub mod config;
pub mod custom_schema;
pub mod document;
pub mod lead;
pub mod message;
pub mod opportunity;
pub mod plan;
pub mod quote;
pub mod team;
