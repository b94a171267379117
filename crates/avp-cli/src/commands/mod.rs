pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod dispatch;
pub mod info;
pub mod payment;
pub mod project;
pub mod shared;
