pub mod footer;
pub mod header;
pub mod members;
pub mod teams;
