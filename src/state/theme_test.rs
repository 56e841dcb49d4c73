use super::*;

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggle_flips_mode() {
    assert_eq!(Theme::Light.toggle(), Theme::Dark);
    assert_eq!(Theme::Dark.toggle(), Theme::Light);
}

#[test]
fn double_toggle_is_identity() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.toggle().toggle(), theme);
    }
}

#[test]
fn as_str_and_parse_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(Theme::parse("solarized"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
}

#[test]
fn icon_offers_the_other_mode() {
    assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
    assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
}
