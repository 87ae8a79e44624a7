pub mod auth;
pub mod interface;
pub mod resolver;
