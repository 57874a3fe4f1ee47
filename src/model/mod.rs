pub mod action;
pub mod channel;
pub mod playlist;
