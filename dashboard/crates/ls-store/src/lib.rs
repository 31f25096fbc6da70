pub mod error;
pub mod keys;
pub mod local_store;
pub mod preference_store;
pub mod session_store;

#[cfg(test)]
mod tests;

pub use error::{Result, StoreError};
pub use local_store::LocalStore;
pub use preference_store::PreferenceStore;
