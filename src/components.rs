//! UI components: the screensaver and the page revealed behind it.

pub mod landing;
pub mod screensaver;
