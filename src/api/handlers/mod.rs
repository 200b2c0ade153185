pub mod admin;
pub mod auth_pages;
pub mod dashboard;
pub mod demo;
pub mod fallback;
pub mod health;
pub mod home;
