pub mod get_message;
pub mod list_messages;
pub mod submit_image_turn;
pub mod submit_turn;
