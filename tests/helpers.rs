use slock_cover::model::PackedColor;
use slock_cover::{color_to_hex, parse_hex_color};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn color_to_hex_always_writes_alpha() {
    assert_eq!(color_to_hex(PackedColor(0x2433_3AA0)), "#24333AA0");
    assert_eq!(color_to_hex(PackedColor(0xFF00_80FF)), "#FF0080FF");
}

#[test]
fn color_to_hex_pads_small_bytes() {
    assert_eq!(color_to_hex(PackedColor(0x0102_0300)), "#01020300");
}

#[test]
fn parse_hex_rgb_is_opaque() {
    let color = parse_hex_color("#FF0080").expect("valid rgb hex");
    assert_eq!(color, PackedColor(0xFF00_80FF));
    let (r, g, b, a) = color.rgba();
    assert!(approx_eq(r, 1.0));
    assert!(approx_eq(g, 0.0));
    assert!(approx_eq(b, 128.0 / 255.0));
    assert!(approx_eq(a, 1.0));
}

#[test]
fn parse_hex_rgba_keeps_low_byte_as_alpha() {
    let color = parse_hex_color("#33669980").expect("valid rgba hex");
    assert_eq!(color.alpha(), 0x80);
    assert_eq!((color.red(), color.green(), color.blue()), (0x33, 0x66, 0x99));
}

#[test]
fn parse_hex_trims_and_ignores_whitespace() {
    let color = parse_hex_color("  ff00FF80  ").expect("valid with whitespace and mixed case");
    assert_eq!(color, PackedColor(0xFF00_FF80));
}

#[test]
fn parse_hex_rejects_bad_input() {
    assert_eq!(parse_hex_color(""), None);
    assert_eq!(parse_hex_color("#FFF"), None);
    assert_eq!(parse_hex_color("#GG0000"), None);
    assert_eq!(parse_hex_color("#FF00FF8"), None);
    assert_eq!(parse_hex_color("#FF00FF8000"), None);
}

#[test]
fn hex_round_trip_for_base_color() {
    let hex = color_to_hex(PackedColor(0x2433_3AA0));
    assert_eq!(parse_hex_color(&hex), Some(PackedColor(0x2433_3AA0)));
}
