//! Click delegation for dynamically rendered lesson rows
//!
//! The lesson list and the watch list are re-rendered on every change, so
//! click handling resolves the clicked element to its nearest lesson row (or
//! remove button) and reads the lesson identity from `data-lesson-*`
//! attributes instead of binding handlers per row.

use crate::model::LessonRecord;

/// Selector of a row in the search results
pub const LESSON_ITEM_SELECTOR: &str = ".lesson-item";

/// Selector of a remove button in the watch list
pub const REMOVE_BUTTON_SELECTOR: &str = ".remove-lesson-btn";

pub const LESSON_ID_ATTR: &str = "data-lesson-id";
pub const LESSON_NAME_ATTR: &str = "data-lesson-name";
pub const LESSON_TIME_ATTR: &str = "data-lesson-time";
pub const LESSON_STATUS_ATTR: &str = "data-lesson-status";

/// The part of a DOM element that click delegation needs
pub trait ClickTarget: Sized {
    /// The element itself or its nearest ancestor matching `selector`
    fn closest(&self, selector: &str) -> Option<Self>;

    fn attribute(&self, name: &str) -> Option<String>;
}

/// Resolve a click to the lesson it belongs to.
///
/// Returns `None` if the click was outside any element matching `selector`,
/// or if that element lacks a non-empty id, name, time or status.
pub fn lesson_identity<T: ClickTarget>(target: &T, selector: &str) -> Option<LessonRecord> {
    let element = target.closest(selector)?;
    let read = |name: &str| element.attribute(name).filter(|value| !value.is_empty());

    let lesson = LessonRecord {
        id: read(LESSON_ID_ATTR)?,
        name: read(LESSON_NAME_ATTR)?,
        time: read(LESSON_TIME_ATTR)?,
        status: read(LESSON_STATUS_ATTR)?,
    };
    Some(lesson)
}
