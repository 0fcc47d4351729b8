//! Application services

mod age_service;

pub use age_service::AgeService;
