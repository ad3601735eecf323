pub mod auth_service;
pub mod availability;
pub mod booking_factory;
pub mod dashboard;
pub mod payment;
pub mod pricing;
pub mod reference;
pub mod search;
pub mod voucher;
