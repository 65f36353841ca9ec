pub mod authorization_service;
pub mod password_service;
pub mod token_service;
pub mod user_service;
