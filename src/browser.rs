//! web-sys backing for [`ThemeHost`]: `localStorage`, `matchMedia` and the
//! live document. Only meaningful inside a browser.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, Window};

use crate::config::{ThemeConfig, CONFIG_ELEMENT_ID};
use crate::error::ThemeError;
use crate::theme::{ThemeController, ThemeHost, ToggleControl};

pub struct BrowserHost {
    window: Window,
    document: Document,
    root: Element,
}

impl BrowserHost {
    pub fn new() -> Result<Self, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
        let document = window.document().ok_or(ThemeError::NoDocument)?;
        let root = document
            .document_element()
            .ok_or(ThemeError::NoRootElement)?;
        Ok(Self {
            window,
            document,
            root,
        })
    }

    /// Text of the embedded JSON config element, if the page has one.
    pub fn embedded_config(&self) -> Option<String> {
        self.document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
    }
}

impl ToggleControl for HtmlInputElement {
    fn is_checked(&self) -> bool {
        HtmlInputElement::checked(self)
    }

    fn set_checked(&self, checked: bool) {
        HtmlInputElement::set_checked(self, checked);
    }
}

impl ThemeHost for BrowserHost {
    type Toggle = HtmlInputElement;

    fn find_toggle(&self, id: &str) -> Option<HtmlInputElement> {
        let element = self.document.get_element_by_id(id)?;
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(input),
            Err(_) => {
                log::warn!("#{} is not an <input> element", id);
                None
            }
        }
    }

    fn stored_preference(&self, key: &str) -> Option<String> {
        let storage = self.window.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn store_preference(&self, key: &str, value: &str) {
        let Some(storage) = self.window.local_storage().ok().flatten() else {
            log::warn!("localStorage unavailable, theme not saved");
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("Failed to save theme under {:?}", key);
        }
    }

    fn prefers_dark(&self, query: &str) -> bool {
        self.window
            .match_media(query)
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        if self.root.set_attribute(name, value).is_err() {
            log::warn!("Failed to set {}={:?} on <html>", name, value);
        }
    }

    fn remove_root_attribute(&self, name: &str) {
        if self.root.remove_attribute(name).is_err() {
            log::warn!("Failed to remove {} from <html>", name);
        }
    }
}

/// Config for the current page: the embedded override if present, else defaults.
pub fn page_config() -> ThemeConfig {
    let raw = BrowserHost::new()
        .ok()
        .and_then(|host| host.embedded_config());
    ThemeConfig::from_embedded(raw.as_deref())
}

/// Initialize the controller against the live document and attach the
/// toggle's change handler. The handler keeps the controller alive for the
/// lifetime of the page.
pub fn start(config: ThemeConfig) -> Result<(), ThemeError> {
    let controller = ThemeController::initialize(BrowserHost::new()?, config)?;
    log::info!(
        "Theme controller bound to #{} with theme {}",
        controller.config().toggle_id,
        controller.theme()
    );

    let toggle = controller.toggle().clone();
    let controller = Rc::new(RefCell::new(controller));

    let on_change = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        controller.borrow_mut().toggle_changed();
    });
    toggle.set_onchange(Some(on_change.as_ref().unchecked_ref()));
    on_change.forget();

    Ok(())
}
