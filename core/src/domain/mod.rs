pub mod common;
pub mod consultation;
pub mod conversation;
pub mod intent;
pub mod llm;
pub mod pipeline;
pub mod product;
pub mod session;
