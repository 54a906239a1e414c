//! Renders the application icons of the chat PWA: a diagonal gradient square
//! with a centered, drop-shadowed letter.

pub mod bitmap_font;
pub mod font;
pub mod gradient;
pub mod icon_gen;
