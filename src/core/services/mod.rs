pub mod prefs;
pub mod presentation;
pub mod task_ops;

pub use prefs::{LocalStorageStore, PreferenceStore, Preferences};
pub use presentation::{DomSink, PresentationSink};
