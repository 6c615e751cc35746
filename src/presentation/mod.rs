pub mod clipboard;
pub mod controller;
pub mod dtos;
pub mod enums;
pub mod models;
pub mod page;
pub mod prompt_form;
pub mod session;
pub mod surprise;
pub mod view;
