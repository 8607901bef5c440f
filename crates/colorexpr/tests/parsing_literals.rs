//! Integration tests for locating and decoding color literals.
//!
//! Tests every notation the parser recognizes:
//! - Hex literals in all four lengths
//! - CSS / QSS functions: rgb, rgba, hsl, hsla, hsv, hsva
//! - QML helpers and GLSL vectors
//! - Cursor placement, priority and rejection of malformed literals

use colorexpr::{ColorFormat, ColorValue, ParseError, Span, parse};

/// Parses a line that holds exactly one literal, with the cursor at its start.
fn parse_whole(input: &str) -> (ColorValue, ColorFormat) {
    let expr = parse(input, 0).expect("expected a color literal");
    assert_eq!(expr.span, Span::new(0, input.chars().count()), "span of {input}");
    (expr.value, expr.format)
}

fn assert_close(actual: ColorValue, expected: ColorValue, tolerance: u8) {
    let channels = [
        (actual.r, expected.r),
        (actual.g, expected.g),
        (actual.b, expected.b),
        (actual.a, expected.a),
    ];
    for (a, e) in channels {
        assert!(
            a.abs_diff(e) <= tolerance,
            "{actual:?} differs from {expected:?} by more than {tolerance}"
        );
    }
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_hex_under_cursor() {
    let expr = parse("#ff0000", 2).unwrap();
    assert_eq!(expr.span, Span::new(0, 7));
    assert_eq!(expr.value, ColorValue::rgba(255, 0, 0, 255));
    assert_eq!(expr.format, ColorFormat::Hex);
}

#[test]
fn test_rgba_under_cursor() {
    let expr = parse("rgba(0, 128, 255, 0.50)", 10).unwrap();
    assert_eq!(expr.format, ColorFormat::Rgba);
    assert_close(expr.value, ColorValue::rgba(0, 128, 255, 127), 1);
}

#[test]
fn test_short_hex_expands() {
    let expr = parse("#abc", 1).unwrap();
    assert_eq!(expr.value, ColorValue::rgb(170, 187, 204));
}

#[test]
fn test_hsl_under_cursor() {
    let expr = parse("hsl(120, 50%, 50%)", 5).unwrap();
    assert_eq!(expr.format, ColorFormat::Hsl);
    assert_eq!(expr.value, ColorValue::rgb(64, 191, 64));
}

#[test]
fn test_nothing_here() {
    assert_eq!(
        parse("nothing here", 3),
        Err(ParseError::NoLiteralFound { offset: 3 })
    );
}

// ============================================================================
// HEX
// ============================================================================

#[test]
fn test_hex_short_alpha() {
    assert_eq!(
        parse_whole("#f008"),
        (ColorValue::rgba(255, 0, 0, 0x88), ColorFormat::HexAlpha)
    );
}

#[test]
fn test_hex_long_alpha() {
    assert_eq!(
        parse_whole("#0080ff80"),
        (ColorValue::rgba(0, 128, 255, 128), ColorFormat::HexAlpha)
    );
}

#[test]
fn test_hex_case_insensitive() {
    assert_eq!(parse_whole("#AaBbCc"), parse_whole("#aabbcc"));
}

#[test]
fn test_hex_invalid_lengths_not_found() {
    for line in ["#ff", "#fffff", "#ff00000", "#gg0000"] {
        assert!(parse(line, 1).is_err(), "{line} should not parse");
    }
}

#[test]
fn test_hex_inside_css_declaration() {
    let expr = parse("  color: #9932cc; /* orchid */", 12).unwrap();
    assert_eq!(expr.span, Span::new(9, 7));
    assert_eq!(expr.value, ColorValue::rgb(0x99, 0x32, 0xcc));
}

// ============================================================================
// RGB / RGBA
// ============================================================================

#[test]
fn test_rgb_basic() {
    assert_eq!(
        parse_whole("rgb(255, 128, 64)"),
        (ColorValue::rgb(255, 128, 64), ColorFormat::Rgb)
    );
}

#[test]
fn test_rgb_no_spaces() {
    assert_eq!(
        parse_whole("rgb(255,128,64)"),
        (ColorValue::rgb(255, 128, 64), ColorFormat::Rgb)
    );
}

#[test]
fn test_rgb_uppercase_name() {
    assert_eq!(parse_whole("RGB(1, 2, 3)").0, ColorValue::rgb(1, 2, 3));
}

#[test]
fn test_rgb_percent() {
    assert_eq!(
        parse_whole("rgb(100%, 50%, 0%)"),
        (ColorValue::rgb(255, 128, 0), ColorFormat::RgbPercent)
    );
}

#[test]
fn test_rgba_percent() {
    assert_eq!(
        parse_whole("rgba(0%, 0%, 100%, 25%)"),
        (ColorValue::rgba(0, 0, 255, 64), ColorFormat::RgbaPercent)
    );
}

#[test]
fn test_rgba_alpha_bounds() {
    assert_eq!(parse_whole("rgba(1, 2, 3, 0)").0.a, 0);
    assert_eq!(parse_whole("rgba(1, 2, 3, 1)").0.a, 255);
    assert_eq!(parse_whole("rgba(1, 2, 3, 1.00)").0.a, 255);
}

// ============================================================================
// HSL / HSV
// ============================================================================

#[test]
fn test_hsl_primaries() {
    assert_eq!(parse_whole("hsl(0, 100%, 50%)").0, ColorValue::rgb(255, 0, 0));
    assert_eq!(parse_whole("hsl(120, 100%, 50%)").0, ColorValue::rgb(0, 255, 0));
    assert_eq!(parse_whole("hsl(240, 100%, 50%)").0, ColorValue::rgb(0, 0, 255));
}

#[test]
fn test_hsl_grayscale() {
    assert_eq!(parse_whole("hsl(0, 0%, 0%)").0, ColorValue::rgb(0, 0, 0));
    assert_eq!(parse_whole("hsl(0, 0%, 100%)").0, ColorValue::rgb(255, 255, 255));
}

#[test]
fn test_hsla_alpha() {
    assert_eq!(
        parse_whole("hsla(0, 100%, 50%, 0.5)"),
        (ColorValue::rgba(255, 0, 0, 128), ColorFormat::Hsla)
    );
}

#[test]
fn test_hsl_fractional_saturation() {
    assert_eq!(
        parse_whole("hsl(120, 0.5, 0.5)").0,
        parse_whole("hsl(120, 50%, 50%)").0
    );
}

#[test]
fn test_hsv_percent() {
    assert_eq!(
        parse_whole("hsv(60, 100%, 100%)"),
        (ColorValue::rgb(255, 255, 0), ColorFormat::Hsv)
    );
}

#[test]
fn test_hsv_byte_scale() {
    // Qt style sheets write saturation and value on a 0-255 scale.
    assert_eq!(parse_whole("hsv(240, 255, 255)").0, ColorValue::rgb(0, 0, 255));
    assert_eq!(parse_whole("hsv(0, 0, 128)").0, ColorValue::rgb(128, 128, 128));
}

#[test]
fn test_hsva_alpha() {
    assert_eq!(
        parse_whole("hsva(300, 100%, 100%, 0.00)"),
        (ColorValue::rgba(255, 0, 255, 0), ColorFormat::Hsva)
    );
}

// ============================================================================
// QML / GLSL
// ============================================================================

#[test]
fn test_qml_rgba() {
    assert_eq!(
        parse_whole("Qt.rgba(1.000, 0.502, 0.000, 1.000)"),
        (ColorValue::rgb(255, 128, 0), ColorFormat::QmlRgba)
    );
}

#[test]
fn test_qml_hsla() {
    let (value, format) = parse_whole("Qt.hsla(0.667, 1.000, 0.500, 0.500)");
    assert_eq!(format, ColorFormat::QmlHsla);
    assert_close(value, ColorValue::rgba(0, 0, 255, 128), 1);
}

#[test]
fn test_vec3() {
    assert_eq!(
        parse_whole("vec3(0.0, 1.0, 0.0)"),
        (ColorValue::rgb(0, 255, 0), ColorFormat::Vec3)
    );
}

#[test]
fn test_vec4() {
    assert_eq!(
        parse_whole("vec4(0.2, 0.4, 0.6, 0.8)"),
        (ColorValue::rgba(51, 102, 153, 204), ColorFormat::Vec4)
    );
}

#[test]
fn test_vec_in_glsl_statement() {
    let line = "    gl_FragColor = vec4(1.0, 0.0, 0.0, 1.0);";
    let expr = parse(line, 25).unwrap();
    assert_eq!(expr.span, Span::new(19, 24));
    assert_eq!(expr.format, ColorFormat::Vec4);
}

// ============================================================================
// CLAMPING
// ============================================================================

#[test]
fn test_clamping_is_idempotent() {
    let pairs = [
        ("rgb(300, -5, 128)", "rgb(255, 0, 128)"),
        ("rgba(0, 0, 0, 2.5)", "rgba(0, 0, 0, 1)"),
        ("rgb(150%, 0%, 0%)", "rgb(100%, 0%, 0%)"),
        ("hsl(400, 120%, 50%)", "hsl(359, 100%, 50%)"),
        ("hsv(-10, 50%, 200%)", "hsv(0, 50%, 100%)"),
        ("vec3(2.0, -1.0, 0.5)", "vec3(1.0, 0.0, 0.5)"),
        ("Qt.rgba(1.5, 0, 0, 9)", "Qt.rgba(1, 0, 0, 1)"),
    ];
    for (out_of_range, clamped) in pairs {
        assert_eq!(
            parse_whole(out_of_range),
            parse_whole(clamped),
            "{out_of_range} vs {clamped}"
        );
    }
}

// ============================================================================
// MALFORMED LITERALS
// ============================================================================

#[test]
fn test_wrong_arity_rejected() {
    for line in [
        "rgb(255, 0)",
        "rgb(255, 0, 0, 1)",
        "rgba(255, 0, 0)",
        "hsl(0, 50%)",
        "hsva(0, 50%, 50%)",
        "vec4(1.0, 0.0, 0.0)",
        "Qt.rgba(1, 0, 0)",
    ] {
        assert!(parse(line, 2).is_err(), "{line} should be rejected");
    }
}

#[test]
fn test_unparsable_arguments_rejected() {
    for line in ["rgb(red, 0, 0)", "rgb(1, 2, 3", "rgb(1,, 2, 3)", "hsl(a, b, c)", "vec3()"] {
        assert!(parse(line, 2).is_err(), "{line} should be rejected");
    }
}

#[test]
fn test_percent_arguments_rejected_in_float_notations() {
    for line in [
        "vec3(50%, 0%, 0%)",
        "vec4(1.0, 0.0, 0.0, 50%)",
        "Qt.rgba(50%, 0, 0, 1)",
        "Qt.hsla(0.5, 1.0, 50%, 1.0)",
    ] {
        assert_eq!(
            parse(line, 2),
            Err(ParseError::NoLiteralFound { offset: 2 }),
            "{line} should be rejected"
        );
    }
}

#[test]
fn test_unknown_function_rejected() {
    assert!(parse("cmyk(0, 0, 0, 0)", 2).is_err());
    assert!(parse("vec2(0.0, 1.0)", 2).is_err());
}

// ============================================================================
// CURSOR PLACEMENT
// ============================================================================

#[test]
fn test_cursor_outside_literal() {
    let line = "a = #fff; b = 1;";
    assert!(parse(line, 0).is_err());
    assert!(parse(line, 12).is_err());
    assert!(parse(line, 4).is_ok());
}

#[test]
fn test_cursor_right_after_literal() {
    let expr = parse("x = #fff;", 8).unwrap();
    assert_eq!(expr.span, Span::new(4, 4));
}

#[test]
fn test_span_is_stable_inside_literal() {
    let line = "border: 1px solid hsla(210, 40%, 60%, 0.75);";
    let first = parse(line, 18).unwrap();
    assert_eq!(first.span, Span::new(18, 25));
    for offset in first.span.start..first.span.end() {
        assert_eq!(parse(line, offset).unwrap(), first, "offset {offset}");
    }
}

#[test]
fn test_back_to_back_literals_of_different_grammars() {
    let line = "rgb(1, 2, 3)vec3(0.0, 0.0, 0.0)";

    let first = parse(line, 11).unwrap();
    assert_eq!(first.span, Span::new(0, 12));
    assert_eq!(first.format, ColorFormat::Rgb);

    let second = parse(line, 12).unwrap();
    assert_eq!(second.span, Span::new(12, 19));
    assert_eq!(second.format, ColorFormat::Vec3);
    assert_eq!(parse(line, 13).unwrap(), second);
}

#[test]
fn test_hex_touching_function_start() {
    let line = "#fffrgb(0, 0, 0)";
    assert!(parse(line, 2).is_err());

    let line = "#fff,rgb(0, 0, 0)";
    assert_eq!(parse(line, 4).unwrap().format, ColorFormat::Hex);
    assert_eq!(parse(line, 5).unwrap().format, ColorFormat::Rgb);
}

#[test]
fn test_second_literal_on_line() {
    let line = "gradient(#000000, rgb(255, 255, 255))";
    assert_eq!(parse(line, 12).unwrap().format, ColorFormat::Hex);

    let expr = parse(line, 25).unwrap();
    assert_eq!(expr.format, ColorFormat::Rgb);
    assert_eq!(expr.span, Span::new(18, 18));
}

#[test]
fn test_offset_past_end() {
    assert_eq!(
        parse("#fff", 9),
        Err(ParseError::OffsetOutOfRange { offset: 9, len: 4 })
    );
}

#[test]
fn test_empty_line() {
    assert_eq!(parse("", 0), Err(ParseError::NoLiteralFound { offset: 0 }));
}
