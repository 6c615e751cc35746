pub mod controller;
pub mod envy;
pub mod models;
