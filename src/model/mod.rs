pub mod catalog;
pub mod fact;
pub mod game_result;
pub mod game_state;
pub mod message;
