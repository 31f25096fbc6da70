use crate::{ActiveView, Role, Session};

use std::str::FromStr;

use serde_json::json;

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("veterinarian").unwrap(), Role::Veterinarian);
    assert_eq!(
        Role::from_str("farmer").unwrap(),
        Role::Other(String::from("farmer"))
    );
    assert!(Role::from_str("  ").is_err());
}

#[test]
fn test_admin_lands_on_dashboard() {
    assert_eq!(Role::Admin.landing_view(), ActiveView::Dashboard);
}

#[test]
fn test_other_roles_land_on_portal() {
    for role in [
        Role::Hospital,
        Role::Veterinarian,
        Role::Slaughterhouse,
        Role::Other(String::from("farmer")),
    ] {
        assert_eq!(role.landing_view(), ActiveView::Portal);
    }
}

#[test]
fn test_session_display_name_prefers_full_name() {
    let session = Session::new(
        json!({ "id": "u-1", "full_name": "Ali Ahmed", "email": "ali@example.com" }),
        Role::Hospital,
    );

    assert_eq!(session.display_name(), "Ali Ahmed");
    assert_eq!(session.user_id(), Some("u-1"));
}

#[test]
fn test_session_display_name_falls_back() {
    let session = Session::new(json!({ "email": "ali@example.com" }), Role::Admin);
    assert_eq!(session.display_name(), "ali@example.com");

    let anonymous = Session::new(json!({}), Role::Admin);
    assert_eq!(anonymous.display_name(), "User");
    assert_eq!(anonymous.user_id(), None);
}
