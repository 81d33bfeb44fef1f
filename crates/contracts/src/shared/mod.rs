pub mod assets;
pub mod date_utils;
pub mod layout;
pub mod reveal;
pub mod tab_controller;
