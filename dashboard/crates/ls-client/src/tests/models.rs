use crate::{HospitalRequest, LoginResponse, RemoteSettings};

use ls_core::{ActiveView, Preferences, Role, Theme};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use serde_json::json;

#[test]
fn given_preferences_when_converted_then_snake_case_settings() {
    // Given
    let prefs = Preferences {
        theme: Theme::Dark,
        auto_save_enabled: false,
        two_factor_enabled: true,
        ..Preferences::default()
    };

    // When
    let value = serde_json::to_value(RemoteSettings::from(&prefs)).unwrap();

    // Then
    assert_that!(
        value,
        eq(&json!({
            "theme": "dark",
            "language": "english",
            "notifications": true,
            "sounds": true,
            "auto_save": false,
            "two_factor_auth": true
        }))
    );
}

#[test]
fn given_partial_remote_settings_when_decoded_then_defaults_fill_gaps() {
    // Given
    let body = json!({ "theme": "auto", "sounds": false, "user_id": "u-1" });

    // When
    let remote: RemoteSettings = serde_json::from_value(body).unwrap();
    let prefs = Preferences::from(remote);

    // Then
    assert_that!(prefs.theme, eq(Theme::Auto));
    assert_that!(prefs.sounds_enabled, eq(false));
    assert_that!(prefs.notifications_enabled, eq(true));
    assert_that!(prefs.language, eq("english"));
}

#[test]
fn given_unknown_remote_theme_when_converted_then_default_theme() {
    let remote = RemoteSettings {
        theme: String::from("sepia"),
        ..RemoteSettings::default()
    };

    let prefs = Preferences::from(remote);

    assert_that!(prefs.theme, eq(Theme::Light));
}

#[test]
fn given_login_body_with_known_role_when_session_then_restorable() {
    // Given
    let response: LoginResponse = serde_json::from_value(json!({
        "access_token": "tok",
        "token_type": "bearer",
        "user": { "id": "u-7", "full_name": "Dr. Ama", "role": "veterinarian" },
        "settings": null
    }))
    .unwrap();

    // When
    let session = response.session().unwrap();

    // Then
    assert_that!(session.role, eq(&Role::Veterinarian));
    assert_that!(session.user_id(), some(eq("u-7")));
    assert_that!(response.settings, none());
}

#[test]
fn given_login_body_with_farmer_role_when_session_then_routed_to_portal() {
    let response: LoginResponse = serde_json::from_value(json!({
        "access_token": "tok",
        "user": { "id": "u-8", "role": "farmer" }
    }))
    .unwrap();

    let session = response.session().unwrap();

    assert_that!(session.role, eq(&Role::Other(String::from("farmer"))));
    assert_that!(session.landing_view(), eq(ActiveView::Portal));
}

#[test]
fn given_login_body_without_role_when_session_then_none() {
    let response: LoginResponse = serde_json::from_value(json!({
        "access_token": "tok",
        "user": { "id": "u-9" }
    }))
    .unwrap();

    assert_that!(response.session(), none());
}

#[test]
fn given_hospital_without_optionals_when_serialized_then_only_name() {
    let hospital = HospitalRequest {
        name: String::from("City Vet"),
        ..HospitalRequest::default()
    };

    let value = serde_json::to_value(&hospital).unwrap();

    assert_that!(value, eq(&json!({ "name": "City Vet" })));
}
