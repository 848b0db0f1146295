pub mod broadcast;
pub mod history;
pub mod last;
pub mod player;
pub mod register;
