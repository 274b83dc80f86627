pub mod accept_disclaimer;
pub mod get_session;
pub mod save_credential;
pub mod save_profile;
