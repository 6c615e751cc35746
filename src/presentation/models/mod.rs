pub mod view_context;
