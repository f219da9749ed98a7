/// Tab Finder - Chrome Extension for jumping to an open tab by title
/// Built with Rust + WASM + Yew

pub mod chrome;
pub mod matcher;
pub mod platform;
pub mod prefs;
pub mod tab_data;
pub mod ui;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::chrome::{ChromeI18n, ChromeTabs, LocalPreferences};
use crate::ui::options::{OptionsProps, OptionsView};
use crate::ui::search::{SearchProps, SearchView};

/// Id of the element each page provides for its view to render into.
const VIEW_ROOT_ID: &str = "tabfinder-view";

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Mount the view named by the page identity marker (the `<body>` id).
/// An unknown marker mounts nothing; the page stays inert apart from a
/// diagnostic line.
#[wasm_bindgen]
pub fn boot() {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());

    match body {
        Some(body) => match body.id().as_str() {
            "tabfinder-main" => start_search(),
            "tabfinder-options" => start_options(),
            other => log::warn!("Unknown page: {:?}", other),
        },
        None => log::error!("Missing component: document body"),
    }
}

// Start the Yew app for the popup search view
fn start_search() {
    if let Some(root) = view_root() {
        let props = SearchProps {
            tabs: Rc::new(ChromeTabs),
            prefs: Rc::new(LocalPreferences),
            i18n: Rc::new(ChromeI18n),
        };
        yew::Renderer::<SearchView>::with_root_and_props(root, props).render();
    }
}

// Start the Yew app for the options page
fn start_options() {
    if let Some(root) = view_root() {
        let props = OptionsProps {
            prefs: Rc::new(LocalPreferences),
            i18n: Rc::new(ChromeI18n),
        };
        yew::Renderer::<OptionsView>::with_root_and_props(root, props).render();
    }
}

/// Look up the render root. Its absence aborts that view's initialization
/// and nothing else.
fn view_root() -> Option<Element> {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(VIEW_ROOT_ID));
    if root.is_none() {
        log::error!("Missing component: #{}", VIEW_ROOT_ID);
    }
    root
}
