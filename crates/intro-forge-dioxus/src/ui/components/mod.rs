pub mod course_rows;
pub mod error_screen;
pub mod field_input;
pub mod intro_form;
pub mod link_rows;
pub mod picture_input;
pub mod result_view;
pub mod validation_notice;

pub use course_rows::CourseRows;
pub use error_screen::ErrorScreen;
pub use field_input::FieldInput;
pub use intro_form::IntroForm;
pub use link_rows::LinkRows;
pub use picture_input::PictureInput;
pub use result_view::ResultView;
pub use validation_notice::ValidationNotice;

use dioxus::prelude::*;

/// Calls an optional handler; components rendered without one are inert.
pub(crate) fn emit<T: 'static>(handler: Option<Callback<T>>, value: T) {
    if let Some(handler) = handler {
        handler.call(value);
    }
}
