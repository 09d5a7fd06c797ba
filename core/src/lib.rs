pub mod codec;
pub mod collection;
pub mod controller;
pub mod image_ref;
#[cfg(feature = "testing")]
pub mod memory;
pub mod modal;
pub mod profile;
pub mod store;

pub use codec::{decode_image_refs, encode_image_refs};
pub use collection::{reorder_in_place, ImageCollection};
pub use controller::{ImageController, LoadStatus, Mutation};
pub use image_ref::ImageRef;
#[cfg(feature = "testing")]
pub use memory::MemoryStore;
pub use modal::{DetailModal, ModalEffect, ModalEvent, ModalPhase, ModalState};
pub use profile::{Profile, ProfileSeed, DEFAULT_PROFILE};
pub use store::{ImageStore, KeyValueStore, ReadOutcome, StoreError, IMAGES_KEY};
