pub mod constants;
pub mod prize;
pub mod scene;
pub mod session;
pub mod theme;
