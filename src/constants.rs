//! Application constants and configuration

pub const APP_NAME: &str = "Registration Form";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const WINDOW_TITLE: &str = "Registration";

pub const WINDOW_SIZE: [f32; 2] = [420.0, 760.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [360.0, 600.0];

/// Bio text is clamped to this many newline-delimited lines after every edit
pub const BIO_MAX_LINES: usize = 4;

pub const PHOTO_MENU_TITLE: &str = "Choose an option";
