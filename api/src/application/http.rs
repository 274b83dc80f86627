pub mod chat;
pub mod health;
pub mod server;
pub mod session;
