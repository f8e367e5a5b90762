//! Editable-profile update lifecycle.
//!
//! Separate from the session slice's read-mostly `user.profile`: this slice
//! holds the profile the edit form works against and the settlement state of
//! the update call. The server response is canonical; on success the stored
//! profile is replaced with whatever came back, on failure it is left
//! untouched.

mod event;
mod image;
mod reducer;
mod state;

pub use event::ProfileEvent;
pub use image::{encode_profile_image, ImageError, MAX_IMAGE_BYTES};
pub use reducer::ProfileReducer;
pub use state::ProfileState;
