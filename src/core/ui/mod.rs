//! Core domain: full-screen scene UI.

pub(crate) mod menu;
pub(crate) mod splash;

pub use menu::MenuScreenUI;
pub use splash::SplashScreenUI;
