use crate::Theme;

use std::str::FromStr;

#[test]
fn test_theme_as_str() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Auto.as_str(), "auto");
}

#[test]
fn test_theme_from_str() {
    assert_eq!(Theme::from_str("light").unwrap(), Theme::Light);
    assert_eq!(Theme::from_str("dark").unwrap(), Theme::Dark);
    assert_eq!(Theme::from_str("auto").unwrap(), Theme::Auto);
    assert!(Theme::from_str("solarized").is_err());
    assert!(Theme::from_str("Dark").is_err());
}

#[test]
fn test_theme_default() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn test_theme_serde_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Auto).unwrap(), "\"auto\"");
    assert!(serde_json::from_str::<Theme>("\"sepia\"").is_err());
}
