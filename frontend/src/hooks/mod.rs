pub mod use_copy_feedback;
pub mod use_scroll_theme;

pub use use_copy_feedback::use_copy_feedback;
pub use use_scroll_theme::use_scroll_theme;
