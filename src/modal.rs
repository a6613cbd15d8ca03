use crate::profile::Work;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(usize),
}

impl ModalState {
    #[must_use]
    pub fn select(self, works: &[Work], index: usize) -> Self {
        if index >= works.len() {
            log::warn!("ignoring selection of unknown work #{index}");
            return self;
        }
        Self::Open(index)
    }

    #[must_use]
    pub fn clear(self) -> Self {
        Self::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn selected_index(self) -> Option<usize> {
        match self {
            Self::Open(index) => Some(index),
            Self::Closed => None,
        }
    }

    pub fn selected(self, works: &[Work]) -> Option<&Work> {
        works.get(self.selected_index()?)
    }
}

/// What the overlay renders, which can lag behind [`ModalState`]: after a
/// close the last work stays mounted as `Leaving` until its exit animation
/// ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPresence {
    #[default]
    Hidden,
    Shown(usize),
    Leaving(usize),
}

impl ModalPresence {
    #[must_use]
    pub fn follow(self, modal: ModalState) -> Self {
        match (modal, self) {
            (ModalState::Open(index), _) => Self::Shown(index),
            (ModalState::Closed, Self::Shown(index)) => Self::Leaving(index),
            (ModalState::Closed, other) => other,
        }
    }

    #[must_use]
    pub fn exit_finished(self) -> Self {
        match self {
            Self::Leaving(_) => Self::Hidden,
            other => other,
        }
    }

    pub fn displayed_index(self) -> Option<usize> {
        match self {
            Self::Shown(index) | Self::Leaving(index) => Some(index),
            Self::Hidden => None,
        }
    }

    pub fn is_leaving(self) -> bool {
        matches!(self, Self::Leaving(_))
    }
}
