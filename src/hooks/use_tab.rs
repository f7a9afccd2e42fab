use gloo_storage::Storage;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

const STORAGE_KEY: &str = "active_tab";

/// Top-level surfaces of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Dashboard,
    Map,
    Analytics,
    Admin,
}

impl Tab {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Map => "Map View",
            Self::Analytics => "Analytics",
            Self::Admin => "Admin",
        }
    }

    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Dashboard => "\u{1f4ca}",
            Self::Map => "\u{1f5fa}\u{fe0f}",
            Self::Analytics => "\u{1f4c8}",
            Self::Admin => "\u{2699}\u{fe0f}",
        }
    }

    pub const fn all() -> &'static [Self] {
        &[Self::Dashboard, Self::Map, Self::Analytics, Self::Admin]
    }
}

/// Handle returned by `use_tab` hook
#[derive(Clone, PartialEq)]
pub struct TabHandle {
    pub tab: Tab,
    pub set_tab: Callback<Tab>,
}

/// Custom hook for the active tab, remembered across reloads in localStorage
#[hook]
pub fn use_tab() -> TabHandle {
    let tab = use_state(|| load_tab_preference().unwrap_or_default());

    // Effect: Persist tab to localStorage on change
    {
        let tab_value = *tab;
        use_effect_with(tab_value, move |tab| {
            save_tab_preference(*tab);
            || ()
        });
    }

    let set_tab = {
        let tab = tab.clone();
        Callback::from(move |new_tab| tab.set(new_tab))
    };

    TabHandle { tab: *tab, set_tab }
}

fn load_tab_preference() -> Option<Tab> {
    gloo_storage::LocalStorage::get(STORAGE_KEY).ok()
}

fn save_tab_preference(tab: Tab) {
    if let Err(e) = gloo_storage::LocalStorage::set(STORAGE_KEY, tab) {
        gloo::console::warn!(format!("Failed to save tab preference: {e:?}"));
    }
}
