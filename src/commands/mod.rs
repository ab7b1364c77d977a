pub mod config;
pub mod dashboard;
pub mod members;
pub mod teams;
