//! Slice registry for modular features.
//! A type-erased container for feature state created once at startup.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Feature state shared across request handlers.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Short name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Enables downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A feature state ready to be registered in the API state.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), state: Box::new(state) }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.state.name()
    }
}
