pub mod admin;
pub mod auth;
pub mod availability;
pub mod booking;
pub mod draft;
pub mod health;
pub mod hotel;
