pub mod app;
pub mod page;
pub mod theme;
pub mod wheel;
pub mod window;
