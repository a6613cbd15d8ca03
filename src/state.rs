use crate::modal::{ModalPresence, ModalState};
use crate::profile::Work;
use crate::scroll::Section;
use crate::theme::ThemePreference;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppAction {
    SetPreference(ThemePreference),
    ScrollTo(Section),
    SelectWork(usize),
    CloseModal,
    ModalExitFinished,
    RevealSkills,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    pub preference: ThemePreference,
    pub active_section: Section,
    pub modal: ModalState,
    pub presence: ModalPresence,
    pub skills_revealed: bool,
    works: &'static [Work],
}

impl AppState {
    pub fn new(preference: ThemePreference, works: &'static [Work]) -> Self {
        Self {
            preference,
            active_section: Section::default(),
            modal: ModalState::default(),
            presence: ModalPresence::default(),
            skills_revealed: false,
            works,
        }
    }

    pub fn works(&self) -> &'static [Work] {
        self.works
    }

    pub fn selected_work(&self) -> Option<&'static Work> {
        self.modal.selected(self.works)
    }

    pub fn displayed_work(&self) -> Option<&'static Work> {
        self.works.get(self.presence.displayed_index()?)
    }

    // No side effects: storage and the document's `dark` class belong to the
    // theme controller.
    #[must_use]
    pub fn transition(&self, action: AppAction) -> Self {
        let mut next = self.clone();
        match action {
            AppAction::SetPreference(preference) => next.preference = preference,
            AppAction::ScrollTo(section) => next.active_section = section,
            AppAction::SelectWork(index) => next.modal = self.modal.select(self.works, index),
            AppAction::CloseModal => next.modal = self.modal.clear(),
            AppAction::ModalExitFinished => next.presence = self.presence.exit_finished(),
            AppAction::RevealSkills => next.skills_revealed = true,
        }
        next.presence = next.presence.follow(next.modal);
        next
    }
}
