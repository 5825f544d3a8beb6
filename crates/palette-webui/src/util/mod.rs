pub mod clipboard;
pub mod color;
pub mod debounce;
