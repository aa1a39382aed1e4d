use crate::color::{ColorName, ColorTag, Rgb, Shade};

fn nearest_hex(hex: &str) -> ColorTag {
    ColorTag::nearest(Rgb::from_hex(hex).unwrap().to_hsl())
}

#[test]
fn test_hex_parsing() {
    assert_eq!(
        Rgb::from_hex("#4c78a8"),
        Some(Rgb {
            r: 0x4c,
            g: 0x78,
            b: 0xa8
        })
    );
    assert_eq!(Rgb::from_hex("4c78a8"), Rgb::from_hex("#4c78a8"));
    assert_eq!(Rgb::from_hex("#4c78"), None);
    assert_eq!(Rgb::from_hex("#zzzzzz"), None);
    assert_eq!(Rgb::from_hex(""), None);
}

#[test]
fn test_primary_anchors() {
    assert_eq!(
        nearest_hex("#ff0000"),
        ColorTag {
            shade: Shade::Plain,
            name: ColorName::Red
        }
    );
    assert_eq!(
        nearest_hex("#000000"),
        ColorTag {
            shade: Shade::Plain,
            name: ColorName::Black
        }
    );
    assert_eq!(
        nearest_hex("#ffffff"),
        ColorTag {
            shade: Shade::Plain,
            name: ColorName::White
        }
    );
    assert_eq!(
        nearest_hex("#808080"),
        ColorTag {
            shade: Shade::Plain,
            name: ColorName::Gray
        }
    );
}

#[test]
fn test_vega_default_palette() {
    // The first two colors of the default vega-lite category scheme
    assert_eq!(
        nearest_hex("#4c78a8"),
        ColorTag {
            shade: Shade::Plain,
            name: ColorName::Blue
        }
    );
    assert_eq!(
        nearest_hex("#f58518"),
        ColorTag {
            shade: Shade::Plain,
            name: ColorName::Orange
        }
    );
}

#[test]
fn test_light_and_dark_shades() {
    assert_eq!(
        nearest_hex("#ffcccc"),
        ColorTag {
            shade: Shade::Light,
            name: ColorName::Red
        }
    );
    assert_eq!(
        nearest_hex("#800000"),
        ColorTag {
            shade: Shade::Dark,
            name: ColorName::Red
        }
    );
}

#[test]
fn test_nearest_is_deterministic() {
    assert_eq!(nearest_hex("#4c78a8"), nearest_hex("#4c78a8"));
}

#[test]
fn test_tag_codes() {
    let tag = ColorTag {
        shade: Shade::Plain,
        name: ColorName::Red,
    };
    assert_eq!(tag.code(), "C-R");
    let tag = ColorTag {
        shade: Shade::Dark,
        name: ColorName::Blue,
    };
    assert_eq!(tag.code(), "CDb");
    let tag = ColorTag {
        shade: Shade::Light,
        name: ColorName::Pink,
    };
    assert_eq!(tag.code(), "CLp");
}

#[test]
fn test_phrases() {
    let tag = ColorTag {
        shade: Shade::Light,
        name: ColorName::Red,
    };
    assert_eq!(tag.phrase("bar"), "the light red bar");
    let tag = ColorTag {
        shade: Shade::Plain,
        name: ColorName::Green,
    };
    assert_eq!(tag.phrase("line"), "the green line");
    assert_eq!(tag.to_string(), "green");
}
