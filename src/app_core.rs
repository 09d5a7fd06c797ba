use std::cell::RefCell;
use std::rc::Rc;

use crate::input;
use postgrid_core::{
    DetailModal, ImageController, ImageRef, ImageStore, KeyValueStore, LoadStatus, ModalEffect,
    ModalEvent, ModalPhase, ModalState, Mutation, Profile,
};

pub(crate) type AppSubscriber = Rc<dyn Fn()>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub(crate) fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Read-only view of the app handed to the components.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AppSnapshot {
    pub(crate) images: Vec<ImageRef>,
    pub(crate) profile: Profile,
    pub(crate) modal: Option<ModalState>,
    pub(crate) theme: ThemeMode,
    pub(crate) lifted: Option<usize>,
}

impl AppSnapshot {
    pub(crate) fn posts(&self) -> usize {
        self.images.len()
    }

    pub(crate) fn modal_phase(&self) -> ModalPhase {
        self.modal
            .as_ref()
            .map(ModalState::phase)
            .unwrap_or(ModalPhase::Closed)
    }
}

struct AppState {
    controller: ImageController<Rc<dyn KeyValueStore>>,
    modal: DetailModal,
    profile: Profile,
    theme: ThemeMode,
    lifted: Option<usize>,
}

/// Single owner of the collection, the modal and the view flags. Components
/// read [`AppSnapshot`]s and call the operations below; every change that
/// matters to the view ends in a subscriber notification.
pub(crate) struct AppCore {
    state: RefCell<AppState>,
    snapshot: RefCell<AppSnapshot>,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

impl AppCore {
    pub(crate) fn new(backend: Rc<dyn KeyValueStore>) -> Rc<Self> {
        Self::with_profile(backend, Profile::default())
    }

    pub(crate) fn with_profile(backend: Rc<dyn KeyValueStore>, profile: Profile) -> Rc<Self> {
        let state = AppState {
            controller: ImageController::new(ImageStore::new(backend)),
            modal: DetailModal::new(),
            profile,
            theme: ThemeMode::default(),
            lifted: None,
        };
        let snapshot = build_snapshot_from_state(&state);
        Rc::new(Self {
            state: RefCell::new(state),
            snapshot: RefCell::new(snapshot),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub(crate) fn subscribe(&self, subscriber: AppSubscriber) -> AppSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        AppSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    pub(crate) fn snapshot(&self) -> AppSnapshot {
        self.snapshot.borrow().clone()
    }

    /// Hydrates the collection from storage. Called once at startup.
    pub(crate) fn load(&self) {
        let status = self.state.borrow_mut().controller.load();
        log_load_status(&status);
        self.notify();
    }

    pub(crate) fn append_images(&self, refs: Vec<ImageRef>) {
        let outcome = self.state.borrow_mut().controller.append(refs);
        self.finish_mutation("append", outcome);
    }

    pub(crate) fn remove_all_images(&self) {
        let outcome = {
            let mut state = self.state.borrow_mut();
            state.lifted = None;
            state.controller.remove_all()
        };
        self.finish_mutation("remove all", outcome);
    }

    pub(crate) fn reorder_images(&self, from: usize, to: usize) {
        let outcome = self.state.borrow_mut().controller.reorder(from, to);
        self.finish_mutation("reorder", outcome);
    }

    pub(crate) fn begin_drag(&self, index: usize) {
        {
            let mut state = self.state.borrow_mut();
            if index >= state.controller.posts() || state.lifted == Some(index) {
                return;
            }
            state.lifted = Some(index);
        }
        self.notify();
    }

    pub(crate) fn end_drag(&self) {
        let had_lift = self.state.borrow_mut().lifted.take().is_some();
        if had_lift {
            self.notify();
        }
    }

    /// Handles a drop on tile `target` with the raw drag payload.
    pub(crate) fn drop_on(&self, payload: Option<&str>, target: usize) {
        let len = {
            let mut state = self.state.borrow_mut();
            state.lifted = None;
            state.controller.posts()
        };
        match input::resolve_drop(payload, target, len) {
            Some(gesture) => self.reorder_images(gesture.from, gesture.to),
            None => self.notify(),
        }
    }

    pub(crate) fn open_image(&self, index: usize) {
        {
            let mut state = self.state.borrow_mut();
            let Some(image) = state.controller.collection().get(index).cloned() else {
                return;
            };
            state.modal.open(image);
        }
        self.notify();
    }

    pub(crate) fn modal_event(&self, event: ModalEvent) {
        let effect = self.state.borrow_mut().modal.apply(event);
        match effect {
            ModalEffect::Delete(image) => {
                // The modal closed either way, so the view always refreshes.
                let outcome = self.state.borrow_mut().controller.remove(&image);
                report_persist_failure("remove", &outcome);
                self.notify();
            }
            ModalEffect::None | ModalEffect::Closed => self.notify(),
        }
    }

    pub(crate) fn toggle_theme(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.theme = state.theme.toggled();
        }
        self.notify();
    }

    fn finish_mutation(&self, label: &str, outcome: Mutation) {
        if !outcome.changed() {
            return;
        }
        report_persist_failure(label, &outcome);
        self.notify();
    }

    fn notify(&self) {
        self.refresh_snapshot_from_state();
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }

    fn refresh_snapshot_from_state(&self) {
        let state = self.state.borrow();
        *self.snapshot.borrow_mut() = build_snapshot_from_state(&state);
    }
}

pub(crate) struct AppSubscription {
    subscriber: AppSubscriber,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

impl Drop for AppSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

#[cfg(target_arch = "wasm32")]
fn log_load_status(status: &LoadStatus) {
    match status {
        LoadStatus::Loaded { count } => {
            gloo::console::log!("images store: loaded", *count);
        }
        LoadStatus::Missing => {
            gloo::console::log!("images store: empty");
        }
        LoadStatus::Malformed => {
            gloo::console::warn!("images store: malformed entry, starting empty");
        }
        LoadStatus::Unavailable(err) => {
            gloo::console::warn!("images store: unavailable", err.to_string());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn log_load_status(_status: &LoadStatus) {}

#[cfg(target_arch = "wasm32")]
fn report_persist_failure(label: &str, outcome: &Mutation) {
    if let Mutation::PersistFailed(err) = outcome {
        gloo::console::warn!("images store: write failed", label, err.to_string());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn report_persist_failure(_label: &str, _outcome: &Mutation) {}

fn build_snapshot_from_state(state: &AppState) -> AppSnapshot {
    AppSnapshot {
        images: state.controller.images().to_vec(),
        profile: state.profile.clone(),
        modal: state.modal.state().cloned(),
        theme: state.theme,
        lifted: state.lifted,
    }
}
