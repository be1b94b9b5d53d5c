//! Map toggle button and the lazily built Leaflet map.

use crate::fetch::BrowserFetch;
use crate::panels::LeafletMap;
use crate::state::DashboardState;
use dioxus::prelude::*;
use owd_api::ApiConfig;
use owd_panels::dom;
use owd_panels::map::{toggle_map, MapController};
use std::cell::RefCell;
use std::rc::Rc;

/// The controller lives for the whole page session; it is created on first
/// render and shared with every click handler.
#[component]
pub fn MapPanel() -> Element {
    let state = use_context::<DashboardState>();
    let config = use_context::<ApiConfig>();
    let controller = use_hook(|| {
        Rc::new(RefCell::new(MapController::new(LeafletMap::new(
            dom::MAP,
            state.map_visible,
        ))))
    });
    let visible = (state.map_visible)();

    let on_toggle = move |_: MouseEvent| {
        let controller = controller.clone();
        let config = config.clone();
        spawn(async move {
            let map_state = toggle_map(&controller, &BrowserFetch, &config).await;
            log::debug!("Map panel is now {:?}", map_state);
        });
    };

    let container_style = if visible {
        "visibility: visible; margin-top: 8px;"
    } else {
        "visibility: hidden; margin-top: 8px;"
    };

    rsx! {
        div {
            button {
                id: dom::TOGGLE_MAP_BUTTON,
                r#type: "button",
                onclick: on_toggle,
                if visible { "Hide Map" } else { "Show Map" }
            }
            div {
                id: dom::MAP_CONTAINER,
                style: "{container_style}",
                div {
                    id: dom::MAP,
                    style: "height: 500px; width: 100%;",
                }
            }
        }
    }
}
