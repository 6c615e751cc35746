pub mod apis;
pub mod controller;
pub mod dtos;
pub mod enums;
pub mod errors;
pub mod models;
pub mod service;
pub mod util;

pub static GENERATE_ROUTE: &str = "/api/generate";
