use crate::store::MappingStore;
use crate::validate::UrlValidator;

/// Application state shared across all HTTP handlers.
///
/// This struct is wrapped in `Arc` and shared across all request handlers
/// via Axum's State extraction. The mapping store is the only shared
/// mutable resource in the process.
pub struct AppState {
    /// In-memory identifier <-> URL mappings
    pub store: MappingStore,

    /// Validator applied to every submitted URL before admission
    pub validator: UrlValidator,
}
