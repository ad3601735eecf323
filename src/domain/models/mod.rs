pub mod auth;
pub mod booking;
pub mod dashboard;
pub mod draft;
pub mod hotel;
pub mod room;
