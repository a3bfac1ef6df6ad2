//! Gallery feature slice. Saving is acknowledged only; drawings are not persisted.

mod error;
#[cfg(feature = "server")]
mod handlers;
mod model;

pub use crate::error::{GalleryError, GalleryErrorExt};
#[cfg(feature = "server")]
pub use crate::handlers::{router, save_handler};
pub use crate::model::{SAVED_MESSAGE, SaveResponse};

use ashy_kernel::domain::config::ApiConfig;
use ashy_kernel::domain::registry::InitializedSlice;

/// Gallery feature state
#[ashy_derive::ashy_slice]
pub struct Gallery {
    /// Message returned for every saved drawing
    pub saved_message: String,
}

impl GalleryInner {
    #[must_use]
    pub fn acknowledge(&self) -> SaveResponse {
        SaveResponse { success: true, message: self.saved_message.clone() }
    }
}

/// Reads the acknowledgement from `[gallery]`, falling back to [`SAVED_MESSAGE`].
///
/// # Errors
/// [`GalleryError::Config`] when `gallery.saved_message` is blank.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, GalleryError> {
    let saved_message = match config.gallery.saved_message.as_deref().map(str::trim) {
        Some("") => {
            return Err(GalleryError::Config {
                message: "`gallery.saved_message` is blank".into(),
                context: None,
            });
        },
        Some(message) => message.to_owned(),
        None => SAVED_MESSAGE.to_owned(),
    };

    tracing::info!(saved_message = %saved_message, "Gallery slice initialized");

    Ok(InitializedSlice::new(Gallery::new(GalleryInner { saved_message })))
}
