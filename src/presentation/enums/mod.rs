pub mod key;
pub mod submit_label;
pub mod theme;
