pub mod benchmark;
pub mod chat;
pub mod diagnose;
pub mod health;
