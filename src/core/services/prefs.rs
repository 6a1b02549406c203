use std::sync::Arc;

use crate::models::{Filter, Theme};

use super::presentation::{DomSink, PresentationSink};

const THEME_KEY: &str = "theme";
const FILTER_KEY: &str = "filter";

/// Key-value store holding the two persisted preferences. Reads happen once
/// at startup; writes are fire-and-forget, one per change, each key
/// independent of the other.
pub trait PreferenceStore: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// Production store backed by the browser's localStorage. A missing or
/// refused storage (private browsing, quota) degrades to defaults on read
/// and a console error on write.
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl PreferenceStore for LocalStorageStore {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    web_sys::console::error_1(
                        &format!("Failed to persist preference '{}'", key).into(),
                    );
                }
            }
            None => {
                web_sys::console::error_1(&"localStorage is not available".into());
            }
        }
    }
}

/// The two injected collaborators bundled for context provision: the
/// preference store and the presentation sink the theme class goes to.
#[derive(Clone)]
pub struct Preferences {
    store: Arc<dyn PreferenceStore>,
    sink: Arc<dyn PresentationSink>,
}

impl Preferences {
    pub fn new(store: Arc<dyn PreferenceStore>, sink: Arc<dyn PresentationSink>) -> Self {
        Self { store, sink }
    }

    pub fn browser() -> Self {
        Self::new(Arc::new(LocalStorageStore), Arc::new(DomSink))
    }

    /// Absent or unrecognized stored value defaults to All.
    pub fn load_filter(&self) -> Filter {
        self.store
            .read(FILTER_KEY)
            .map(|v| Filter::from_stored(&v))
            .unwrap_or(Filter::All)
    }

    pub fn save_filter(&self, filter: Filter) {
        self.store.write(FILTER_KEY, filter.as_str());
    }

    /// Only a stored "dark" restores dark mode; absent or anything else is light.
    pub fn load_theme(&self) -> Theme {
        self.store
            .read(THEME_KEY)
            .map(|v| Theme::from_stored(&v))
            .unwrap_or(Theme::Light)
    }

    pub fn save_theme(&self, theme: Theme) {
        self.store.write(THEME_KEY, theme.as_str());
    }

    /// Mirror the theme onto the document-level presentation class.
    pub fn apply_theme(&self, theme: Theme) {
        self.sink.set_document_class(theme.class_name());
    }
}
