//! Theme context: light / dark switching, persisted per platform.

use std::rc::Rc;

use dioxus::prelude::*;
use store::{PreferenceStore, Preferences, Theme};

use crate::icons::{FaMoon, FaSun};
use crate::Icon;

/// Shared theme state, provided by [`ThemeProvider`].
#[derive(Clone)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    store: Rc<dyn PreferenceStore>,
}

impl ThemeContext {
    /// Flip the theme and remember the choice.
    pub fn toggle(&mut self) {
        let next = (self.theme)().toggled();
        self.theme.set(next);
        if let Err(e) = self.store.save(&Preferences::with_theme(next)) {
            tracing::warn!("Failed to save theme: {e}");
        }
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

/// The preference store for the current platform.
pub fn make_preference_store() -> Rc<dyn PreferenceStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalStorageStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        match store::FileStore::in_config_dir() {
            Some(file_store) => Rc::new(file_store) as Rc<dyn PreferenceStore>,
            None => Rc::new(store::MemoryStore::new()),
        }
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Rc::new(store::MemoryStore::new())
    }
}

/// Set `data-theme` on the document root so the stylesheet can switch palettes.
pub fn apply_theme(theme: Theme) {
    let js = format!(
        "document.documentElement.setAttribute('data-theme', '{}');",
        theme.as_str()
    );
    document::eval(&js);
}

/// Script reporting `prefers-color-scheme: dark` now and on every change.
const WATCH_SYSTEM_THEME_JS: &str = r#"
const query = window.matchMedia('(prefers-color-scheme: dark)');
dioxus.send(query.matches);
query.addEventListener('change', (event) => dioxus.send(event.matches));
await new Promise(() => {});
"#;

/// Theme to switch to when the system setting changes. `None` once the user
/// has saved an explicit choice, which always wins.
pub fn follow_system_theme(saved: &Preferences, system_prefers_dark: bool) -> Option<Theme> {
    match saved.theme {
        Some(_) => None,
        None => Some(saved.effective_theme(system_prefers_dark)),
    }
}

/// Provider component that owns the theme. Wrap the router with it.
///
/// Without a saved choice the theme follows `prefers-color-scheme`, including
/// changes made while the app is open. The store is re-read on every change so
/// a toggle stops the following.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let store = use_hook(make_preference_store);
    let mut theme = use_signal(|| store.load_or_default().effective_theme(false));

    use_context_provider(|| ThemeContext {
        theme,
        store: store.clone(),
    });

    use_effect(move || {
        apply_theme(theme());
    });

    use_hook(move || {
        spawn(async move {
            let mut eval = document::eval(WATCH_SYSTEM_THEME_JS);
            while let Ok(prefers_dark) = eval.recv::<bool>().await {
                if let Some(next) = follow_system_theme(&store.load_or_default(), prefers_dark) {
                    tracing::debug!("system theme is now {next}");
                    theme.set(next);
                }
            }
        });
    });

    rsx! {
        {children}
    }
}

/// Header button switching between light and dark.
#[component]
pub fn ThemeToggle() -> Element {
    let mut ctx = use_theme();
    let dark = (ctx.theme)().is_dark();

    rsx! {
        button {
            class: "theme-toggle",
            title: if dark { "Switch to Light Mode" } else { "Switch to Dark Mode" },
            onclick: move |_| ctx.toggle(),
            if dark {
                Icon { icon: FaSun, width: 18, height: 18 }
            } else {
                Icon { icon: FaMoon, width: 18, height: 18 }
            }
        }
    }
}
