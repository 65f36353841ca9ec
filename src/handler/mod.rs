pub mod token_handler;
pub mod user_handler;
