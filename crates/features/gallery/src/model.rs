use ashy_derive::api_model;

pub const SAVED_MESSAGE: &str = "Your artwork has been saved! 🎨";

/// Acknowledgement of a saved drawing
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct SaveResponse {
    /// Always `true`
    pub success: bool,
    pub message: String,
}
