pub mod account;
pub mod activity;
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
pub mod types;
