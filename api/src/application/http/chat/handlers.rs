pub mod get_history;
pub mod send_message;
