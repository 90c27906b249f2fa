//! Deterministic prompt construction for the two remote generation calls.

pub mod email;
pub mod image;

pub use email::{build_email_prompt, Tone};
pub use image::{build_image_prompt, ImageStyle};
