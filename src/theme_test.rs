use super::*;

/// Store whose writes always fail, like Safari private mode.
struct ReadOnlyStore(Option<String>);

impl PreferenceStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        self.0.clone()
    }

    fn set(&self, _key: &str, _value: &str) -> bool {
        false
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn stored_light_selects_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
}

#[test]
fn anything_else_selects_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("garbage")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("Light")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
    assert_eq!(Theme::from_stored(None), Theme::Dark);
}

#[test]
fn default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn toggled_is_an_involution() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn class_names_are_mutually_exclusive() {
    assert_eq!(Theme::Light.class_name(), "light-theme");
    assert_eq!(Theme::Dark.class_name(), "dark-theme");
    assert_ne!(Theme::Light.class_name(), Theme::Dark.class_name());
}

#[test]
fn as_str_round_trips_through_from_stored() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

#[test]
fn dark_class_presence_maps_to_theme() {
    assert_eq!(Theme::from_dark_class(true), Theme::Dark);
    assert_eq!(Theme::from_dark_class(false), Theme::Light);
}

// =============================================================
// ThemeController
// =============================================================

#[test]
fn load_without_preference_is_dark_and_writes_nothing() {
    let controller = ThemeController::load(MemoryStore::new());
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(controller.store().get("theme"), None);
}

#[test]
fn load_reads_persisted_light() {
    let store = MemoryStore::new();
    store.set("theme", "light");
    let controller = ThemeController::load(store);
    assert_eq!(controller.current(), Theme::Light);
}

#[test]
fn toggle_persists_new_value() {
    let mut controller = ThemeController::load(MemoryStore::new());
    assert_eq!(controller.toggle(), Theme::Light);
    assert_eq!(controller.store().get("theme").as_deref(), Some("light"));
}

#[test]
fn toggle_twice_restores_mode_and_persisted_value() {
    let store = MemoryStore::new();
    store.set("theme", "dark");
    let mut controller = ThemeController::load(store);
    let original = controller.current();

    controller.toggle();
    controller.toggle();

    assert_eq!(controller.current(), original);
    assert_eq!(controller.store().get("theme").as_deref(), Some("dark"));
}

#[test]
fn toggle_flips_even_when_store_rejects_write() {
    let mut controller = ThemeController::load(ReadOnlyStore(Some("light".to_owned())));
    assert_eq!(controller.current(), Theme::Light);
    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(controller.current(), Theme::Dark);
}

#[test]
fn sync_adopts_without_persisting() {
    let mut controller = ThemeController::load(MemoryStore::new());
    controller.sync(Theme::Light);
    assert_eq!(controller.current(), Theme::Light);
    assert_eq!(controller.store().get("theme"), None);
}
