pub mod bubble;
pub mod config;
pub mod debounce;
