use crate::{PreferenceChange, Preferences, Theme};

use googletest::assert_that;
use googletest::prelude::eq;
use serde_json::json;

#[test]
fn given_defaults_then_match_dashboard_defaults() {
    let prefs = Preferences::default();

    assert_that!(prefs.theme, eq(Theme::Light));
    assert_that!(prefs.language.as_str(), eq("english"));
    assert_that!(prefs.notifications_enabled, eq(true));
    assert_that!(prefs.sounds_enabled, eq(true));
    assert_that!(prefs.auto_save_enabled, eq(true));
    assert_that!(prefs.two_factor_enabled, eq(false));
}

#[test]
fn given_partial_settings_when_merged_then_only_present_fields_change() {
    // Given
    let mut prefs = Preferences::default();

    // When
    prefs.merge_json(&json!({ "theme": "dark", "sounds": false }));

    // Then
    assert_that!(prefs.theme, eq(Theme::Dark));
    assert_that!(prefs.sounds_enabled, eq(false));
    assert_that!(prefs.notifications_enabled, eq(true));
    assert_that!(prefs.language.as_str(), eq("english"));
}

#[test]
fn given_unknown_theme_when_merged_then_theme_kept() {
    let mut prefs = Preferences::default();

    prefs.merge_json(&json!({ "theme": "neon", "language": "urdu" }));

    assert_that!(prefs.theme, eq(Theme::Light));
    assert_that!(prefs.language.as_str(), eq("urdu"));
}

#[test]
fn given_wrongly_typed_fields_when_merged_then_ignored_individually() {
    let mut prefs = Preferences::default();

    prefs.merge_json(&json!({ "autoSave": "yes", "twoFactorAuth": true, "language": 7 }));

    assert_that!(prefs.auto_save_enabled, eq(true));
    assert_that!(prefs.two_factor_enabled, eq(true));
    assert_that!(prefs.language.as_str(), eq("english"));
}

#[test]
fn given_non_object_when_merged_then_unchanged() {
    let mut prefs = Preferences::default();

    prefs.merge_json(&json!(["dark"]));

    assert_that!(prefs, eq(&Preferences::default()));
}

#[test]
fn given_change_when_applied_then_single_field_updated() {
    let mut prefs = Preferences::default();

    prefs.apply(&PreferenceChange::Theme(Theme::Auto));
    prefs.apply(&PreferenceChange::Notifications(false));

    assert_that!(prefs.theme, eq(Theme::Auto));
    assert_that!(prefs.notifications_enabled, eq(false));
    assert_that!(prefs.sounds_enabled, eq(true));
}

#[test]
fn given_preferences_when_serialized_then_uses_dashboard_field_names() {
    let value = serde_json::to_value(Preferences::default()).unwrap();

    assert_that!(value["autoSave"], eq(&json!(true)));
    assert_that!(value["twoFactorAuth"], eq(&json!(false)));
    assert_that!(value["notifications"], eq(&json!(true)));
}
