use crate::ImageRef;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Open,
    ConfirmingDelete,
}

/// Per-view state of the detail modal. Nothing here is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalState {
    image: ImageRef,
    likes: u32,
    comment: String,
    menu_open: bool,
    confirming_delete: bool,
}

impl ModalState {
    fn new(image: ImageRef) -> Self {
        Self {
            image,
            likes: 0,
            comment: String::new(),
            menu_open: false,
            confirming_delete: false,
        }
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    pub fn likes(&self) -> u32 {
        self.likes
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    pub fn phase(&self) -> ModalPhase {
        if self.confirming_delete {
            ModalPhase::ConfirmingDelete
        } else {
            ModalPhase::Open
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    Like,
    EditComment(String),
    ToggleMenu,
    CloseMenu,
    RequestDelete,
    CancelDelete,
    ConfirmDelete,
    Close,
}

/// What the owner of the modal has to do after an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalEffect {
    None,
    Closed,
    /// Remove the image from the collection; the modal is already closed.
    Delete(ImageRef),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailModal {
    state: Option<ModalState>,
}

impl DetailModal {
    pub fn new() -> Self {
        Self { state: None }
    }

    /// Opens on `image` with fresh counters, replacing any open view.
    pub fn open(&mut self, image: ImageRef) {
        self.state = Some(ModalState::new(image));
    }

    pub fn state(&self) -> Option<&ModalState> {
        self.state.as_ref()
    }

    pub fn phase(&self) -> ModalPhase {
        self.state
            .as_ref()
            .map(ModalState::phase)
            .unwrap_or(ModalPhase::Closed)
    }

    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    /// Applies `event`. Events that do not fit the current phase are ignored.
    pub fn apply(&mut self, event: ModalEvent) -> ModalEffect {
        let Some(state) = self.state.as_mut() else {
            return ModalEffect::None;
        };
        match (state.phase(), event) {
            (ModalPhase::Open, ModalEvent::Like) => {
                state.likes = state.likes.saturating_add(1);
                ModalEffect::None
            }
            (ModalPhase::Open, ModalEvent::EditComment(text)) => {
                state.comment = text;
                ModalEffect::None
            }
            (ModalPhase::Open, ModalEvent::ToggleMenu) => {
                state.menu_open = !state.menu_open;
                ModalEffect::None
            }
            (ModalPhase::Open, ModalEvent::CloseMenu) => {
                state.menu_open = false;
                ModalEffect::None
            }
            (ModalPhase::Open, ModalEvent::RequestDelete) => {
                state.menu_open = false;
                state.confirming_delete = true;
                ModalEffect::None
            }
            (ModalPhase::Open, ModalEvent::Close) => {
                self.state = None;
                ModalEffect::Closed
            }
            (ModalPhase::ConfirmingDelete, ModalEvent::CancelDelete) => {
                state.confirming_delete = false;
                ModalEffect::None
            }
            (ModalPhase::ConfirmingDelete, ModalEvent::ConfirmDelete) => {
                let image = state.image.clone();
                self.state = None;
                ModalEffect::Delete(image)
            }
            _ => ModalEffect::None,
        }
    }
}
