use super::*;

#[test]
fn test_theme_ids_roundtrip() {
    for kind in [ThemeKind::Dark, ThemeKind::Light, ThemeKind::HighContrast] {
        assert_eq!(ThemeKind::from_id(kind.id()), Some(kind));
    }
}

#[test]
fn test_theme_id_aliases() {
    assert_eq!(ThemeKind::from_id(" VS-Dark "), Some(ThemeKind::Dark));
    assert_eq!(ThemeKind::from_id("light"), Some(ThemeKind::Light));
    assert_eq!(ThemeKind::from_id("solarized"), None);
}

#[test]
fn test_default_theme_is_dark() {
    assert_eq!(ThemeKind::default(), ThemeKind::Dark);
    let palette = ThemeKind::default().palette();
    assert_ne!(palette.fg, palette.bg);
}
