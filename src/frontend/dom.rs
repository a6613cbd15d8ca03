use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Element, Event, EventTarget, MediaQueryList, Storage};

use crate::config::{COLOR_SCHEME_DARK_QUERY, REDUCED_MOTION_QUERY};
use crate::error::StorageError;
use crate::scroll::{Section, SectionBounds};
use crate::subscription::Subscription;
use crate::theme::{MemoryStore, PreferenceStore, ThemeSurface};

const DARK_CLASS: &str = "dark";
const MOUNT_POINT_ID: &str = "app";

pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, StorageError> {
        let storage = window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|_| StorageError::Read {
            key: key.to_string(),
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|_| StorageError::Write {
            key: key.to_string(),
        })
    }
}

pub fn preference_store() -> Box<dyn PreferenceStore> {
    match LocalStore::open() {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::warn!("{err}; keeping the theme preference in memory");
            Box::new(MemoryStore::new())
        }
    }
}

fn media_query(query: &str) -> Option<MediaQueryList> {
    window()?.match_media(query).ok().flatten()
}

fn media_matches(query: &str) -> bool {
    media_query(query).map(|mq| mq.matches()).unwrap_or(false)
}

pub fn prefers_reduced_motion() -> bool {
    media_matches(REDUCED_MOTION_QUERY)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0)
}

pub fn color_scheme_query() -> Option<MediaQueryList> {
    media_query(COLOR_SCHEME_DARK_QUERY)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSurface;

impl ThemeSurface for DocumentSurface {
    fn prefers_dark(&self) -> bool {
        media_matches(COLOR_SCHEME_DARK_QUERY)
    }

    fn set_dark(&self, dark: bool) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };

        let _ = root.class_list().toggle_with_force(DARK_CLASS, dark);
        let _ = root.set_attribute("data-theme", if dark { "dark" } else { "light" });
    }
}

type PendingUpdate = RefCell<Option<Box<dyn FnOnce()>>>;

fn run_pending(pending: &PendingUpdate) {
    let update = pending.borrow_mut().take();
    if let Some(update) = update {
        update();
    }
}

pub fn with_view_transition(update: impl FnOnce() + 'static) {
    if prefers_reduced_motion() {
        update();
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        update();
        return;
    };

    let document_js: JsValue = document.into();
    let start_view_transition =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok());

    let Some(start_view_transition) = start_view_transition else {
        update();
        return;
    };

    let pending: Rc<PendingUpdate> = Rc::new(RefCell::new(Some(Box::new(update))));
    let callback = {
        let pending = Rc::clone(&pending);
        Closure::once_into_js(move || run_pending(&pending))
    };

    if start_view_transition.call1(&document_js, &callback).is_err() {
        run_pending(&pending);
    }
}

pub fn section_bounds(section: Section) -> Option<SectionBounds> {
    let element = window()?.document()?.get_element_by_id(section.id())?;
    let rect = element.get_bounding_client_rect();
    Some(SectionBounds::new(rect.top(), rect.bottom()))
}

pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Subscription
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) =
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
    {
        log::warn!("failed to listen for `{event}`: {err:?}");
        return Subscription::noop();
    }

    let target = target.clone();
    Subscription::new(move || {
        let _ = target
            .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    })
}

pub fn mount_point() -> Option<Element> {
    window()?.document()?.get_element_by_id(MOUNT_POINT_ID)
}
