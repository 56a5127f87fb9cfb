pub mod form;
pub mod image;
pub mod io;
pub mod models;
pub mod render;
pub mod view;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use form::{editable::*, fields::*, groups::*, snapshot::*, validation::*};
pub use image::*;
pub use io::*;
pub use models::{builder::*, record::*};
pub use render::{
    IntroductionJson, JsonLink, RenderMode, Rendered, render, render_document, render_json,
    render_markup,
};
pub use view::*;
