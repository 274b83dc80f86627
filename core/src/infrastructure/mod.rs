pub mod catalog;
pub mod conversation;
pub mod llm;
pub mod session;
