//! Ordered set of lessons on the watch list, keyed by lesson id

use crate::model::SelectedLesson;

/// Result of a toggle, used for user feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Added,
    Removed,
}

/// Insertion-ordered lesson selection with at most one entry per id
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    lessons: Vec<SelectedLesson>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the lesson if its id is already selected, otherwise append it
    pub fn toggle(&mut self, lesson: SelectedLesson) -> SelectionChange {
        if let Some(index) = self.lessons.iter().position(|l| l.id == lesson.id) {
            let removed = self.lessons.remove(index);
            tracing::debug!("Deselected lesson '{}' ({})", removed.name, removed.id);
            SelectionChange::Removed
        } else {
            tracing::debug!("Selected lesson '{}' ({})", lesson.name, lesson.id);
            self.lessons.push(lesson);
            SelectionChange::Added
        }
    }

    pub fn clear(&mut self) {
        self.lessons.clear();
    }

    pub fn list(&self) -> &[SelectedLesson] {
        &self.lessons
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lessons.iter().any(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}
