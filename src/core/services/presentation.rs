/// Where the document-level theme class goes. The widget never touches the
/// document directly; it talks to this sink so theme mirroring stays
/// deterministic and testable.
pub trait PresentationSink: Send + Sync {
    fn set_document_class(&self, class: &str);
}

/// Production sink: mirrors the class onto `document.body`.
pub struct DomSink;

impl PresentationSink for DomSink {
    fn set_document_class(&self, class: &str) {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        match body {
            Some(body) => body.set_class_name(class),
            None => {
                web_sys::console::error_1(&"No document body to apply theme class to".into());
            }
        }
    }
}
