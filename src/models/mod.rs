pub mod hotel;
pub mod room;
