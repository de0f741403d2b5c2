pub mod egg_modal;
pub mod gradient_background;
pub mod icons;
pub mod scene_field;

pub use egg_modal::EggModal;
pub use gradient_background::GradientBackground;
pub use scene_field::SceneField;
