pub mod components;
pub mod icons;
pub mod reveal;
pub mod theme;
