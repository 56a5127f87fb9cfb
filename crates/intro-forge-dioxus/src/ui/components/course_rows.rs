use super::emit;
use crate::ui::actions::FormAction;
use dioxus::prelude::*;
use intro_forge_engine::{CourseEntry, CourseField};

fn course_value(course: &CourseEntry, field: CourseField) -> &str {
    match field {
        CourseField::Department => &course.department,
        CourseField::Number => &course.number,
        CourseField::Name => &course.name,
        CourseField::Reason => &course.reason,
    }
}

/// Editable course rows. Remove buttons are disabled while only one row is left.
#[component]
pub fn CourseRows(courses: Vec<CourseEntry>, on_action: Option<Callback<FormAction>>) -> Element {
    let can_remove = courses.len() > 1;

    rsx! {
        fieldset {
            id: "courseList",
            class: "course-list",
            legend { "Courses I'm Taking & Why" }
            for (row, course) in courses.iter().enumerate() {
                div {
                    key: "{row}",
                    class: "course-row",
                    for field in CourseField::ALL {
                        input {
                            r#type: "text",
                            placeholder: field.placeholder(),
                            value: course_value(course, field),
                            oninput: move |evt| {
                                let value = evt.value();
                                emit(on_action, FormAction::SetCourse { row, field, value })
                            },
                        }
                    }
                    button {
                        r#type: "button",
                        class: "remove-course",
                        disabled: !can_remove,
                        onclick: move |_| emit(on_action, FormAction::RemoveCourse(row)),
                        "Remove"
                    }
                }
            }
            button {
                r#type: "button",
                id: "addCourseButton",
                onclick: move |_| emit(on_action, FormAction::AddCourse),
                "Add Course"
            }
        }
    }
}
