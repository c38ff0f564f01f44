//! Tests for the theme token tables

use msp_theme::{
    ColorRole, FontRole, HexColor, SpacingRole, Theme, TokenValue, COLORS, FONTS, SPACING, THEME,
};

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

// ===================
// Exact values
// ===================

#[test]
fn test_colors_exact_values() {
    let expected = [
        (ColorRole::Background, "#171819"),
        (ColorRole::Panel, "#1f2125"),
        (ColorRole::PanelBorder, "#2f3238"),
        (ColorRole::PanelBorderStrong, "#2e333b"),
        (ColorRole::TextPrimary, "#ffffff"),
        (ColorRole::TextMuted, "#cfd4db"),
        (ColorRole::TextOnLight, "#111111"),
        (ColorRole::LayerActiveBorder, "#4d88ff"),
        (ColorRole::LayerInactiveBorder, "#3a3f4a"),
    ];

    assert_eq!(expected.len(), ColorRole::ALL.len());
    for (role, hex) in expected {
        assert_eq!(COLORS.get(role).to_string(), hex, "colors.{role}");
    }
}

#[test]
fn test_colors_fields() {
    assert_eq!(COLORS.background, HexColor::from_u32(0x171819));
    assert_eq!(COLORS.panel, HexColor::from_u32(0x1f2125));
    assert_eq!(COLORS.panel_border, HexColor::from_u32(0x2f3238));
    assert_eq!(COLORS.panel_border_strong, HexColor::from_u32(0x2e333b));
    assert_eq!(COLORS.text_primary, HexColor::from_u32(0xffffff));
    assert_eq!(COLORS.text_muted, HexColor::from_u32(0xcfd4db));
    assert_eq!(COLORS.text_on_light, HexColor::from_u32(0x111111));
    assert_eq!(COLORS.layer_active_border, HexColor::from_u32(0x4d88ff));
    assert_eq!(COLORS.layer_inactive_border, HexColor::from_u32(0x3a3f4a));
}

#[test]
fn test_fonts_exact_values() {
    assert_eq!(FONTS.sans, "Fira Sans");
    assert_eq!(FONTS.mono, "Fira Mono");
    assert_eq!(FONTS.get(FontRole::Sans), "Fira Sans");
    assert_eq!(FONTS.get(FontRole::Mono), "Fira Mono");
}

#[test]
fn test_spacing_exact_values() {
    assert_eq!(SPACING.xs, 6);
    assert_eq!(SPACING.sm, 8);
    assert_eq!(SPACING.md, 12);
    assert_eq!(SPACING.lg, 16);
}

// ===================
// Shape invariants
// ===================

#[test]
fn test_every_color_is_hex() {
    for (role, color) in COLORS.iter() {
        let text = color.to_string();
        assert!(is_hex_color(&text), "colors.{role} = {text}");
        assert_eq!(HexColor::parse(&text).unwrap(), color);
    }
}

#[test]
fn test_fonts_are_non_empty() {
    for (role, family) in FONTS.iter() {
        assert!(!family.trim().is_empty(), "fonts.{role} is empty");
    }
}

#[test]
fn test_spacing_is_positive_and_increasing() {
    let values: Vec<u32> = SPACING.iter().map(|(_, px)| px).collect();
    assert!(values.iter().all(|px| *px > 0));
    assert!(
        values.windows(2).all(|pair| pair[0] < pair[1]),
        "spacing scale out of order: {values:?}"
    );
    assert_eq!(
        SpacingRole::ALL.to_vec(),
        vec![SpacingRole::Xs, SpacingRole::Sm, SpacingRole::Md, SpacingRole::Lg]
    );
}

// ===================
// Immutability
// ===================

#[test]
fn test_copies_do_not_affect_shared_theme() {
    let mut colors = COLORS;
    colors.background = HexColor::rgb(0, 0, 0);

    let mut theme = *Theme::current();
    theme.spacing.md = 99;
    theme.fonts.mono = "Courier";

    assert_ne!(colors.background, COLORS.background);
    assert_ne!(theme, THEME);

    assert_eq!(COLORS.background.to_string(), "#171819");
    assert_eq!(Theme::current().spacing.md, 12);
    assert_eq!(Theme::current().fonts.mono, "Fira Mono");
    assert_eq!(THEME.colors.background.to_string(), "#171819");
}

#[test]
fn test_independent_references_agree() {
    let first = Theme::current();
    let second = Theme::current();
    assert_eq!(first, second);
    assert_eq!(*first, THEME);
}

#[test]
fn test_concurrent_reads() {
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let theme = Theme::current();
                    (theme.colors.background, theme.spacing.lg)
                })
            })
            .collect();

        for handle in handles {
            let (background, lg) = handle.join().unwrap();
            assert_eq!(background, HexColor::from_u32(0x171819));
            assert_eq!(lg, 16);
        }
    });
}

// ===================
// Scenario
// ===================

#[test]
fn test_read_common_tokens() {
    let theme = Theme::current();
    assert_eq!(theme.colors.background.to_string(), "#171819");
    assert_eq!(theme.spacing.md, 12);
    assert_eq!(theme.fonts.mono, "Fira Mono");

    assert_eq!(
        theme.lookup("colors.background").unwrap().to_string(),
        "#171819"
    );
    assert_eq!(theme.lookup("spacing.md").unwrap(), TokenValue::Spacing(12));
    assert_eq!(
        theme.lookup("fonts.mono").unwrap(),
        TokenValue::Font("Fira Mono")
    );
}
