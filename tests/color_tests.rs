use soft_renderer::math::{fade, mix, pack, unpack, Color, BLANK, BLUE, RED, WHITE};

// ============================================================================
// Pack / Unpack
// ============================================================================

#[test]
fn test_unpack_pack_roundtrip_all_channel_values() {
    for v in 0..=255u8 {
        let colors = [
            Color::new(v, 0, 0, 0),
            Color::new(0, v, 0, 0),
            Color::new(0, 0, v, 0),
            Color::new(0, 0, 0, v),
            Color::new(v, 255 - v, v / 2, v.wrapping_mul(7)),
        ];
        for c in colors {
            assert_eq!(unpack(pack(c)), c);
        }
    }
}

#[test]
fn test_pack_unpack_roundtrip_sampled_pixels() {
    let mut p: u32 = 1;
    for _ in 0..10_000 {
        assert_eq!(pack(unpack(p)), p);
        // xorshift keeps the sample spread over the whole range
        p ^= p << 13;
        p ^= p >> 17;
        p ^= p << 5;
    }
}

#[test]
fn test_channel_order_is_fixed() {
    assert_eq!(pack(Color::new(0x11, 0x22, 0x33, 0x44)), 0x44332211);
    assert_eq!(pack(RED), 0xFF0000FF);
}

// ============================================================================
// Mix
// ============================================================================

#[test]
fn test_mix_opaque_fast_path() {
    for base in [WHITE, BLUE, BLANK, Color::new(9, 8, 7, 6)] {
        let overlay = Color::new(10, 20, 30, 40);
        assert_eq!(mix(base, overlay, 255), overlay);
    }
}

#[test]
fn test_mix_transparent_fast_path() {
    for base in [WHITE, BLUE, Color::new(9, 8, 7, 6)] {
        assert_eq!(mix(base, RED, 0).a, 0);
    }
}

#[test]
fn test_mix_midpoint_red_over_blue() {
    let mixed = mix(BLUE, RED, 128);

    // Arithmetic midpoint of 0 and 255, within integer rounding
    assert!((mixed.r as i32 - 128).abs() <= 1);
    assert_eq!(mixed.g, 0);
    assert!((mixed.b as i32 - 127).abs() <= 1);
    assert_eq!(mixed.a, 128);
}

#[test]
fn test_mix_stays_between_endpoints() {
    let base = Color::new(40, 200, 90, 255);
    let overlay = Color::new(220, 10, 90, 255);

    for alpha in 1..255u8 {
        let mixed = mix(base, overlay, alpha);
        assert!(mixed.r >= base.r && mixed.r <= overlay.r);
        assert!(mixed.g <= base.g && mixed.g >= overlay.g);
        assert_eq!(mixed.b, 90);
        assert_eq!(mixed.a, alpha);
    }
}

// ============================================================================
// Fade
// ============================================================================

#[test]
fn test_fade_replaces_alpha_only() {
    let faded = fade(Color::new(1, 2, 3, 255), 0.0);
    assert_eq!(faded, Color::new(1, 2, 3, 0));
}

#[test]
fn test_fade_clamps_instead_of_wrapping() {
    assert_eq!(fade(RED, 1.01).a, 255);
    assert_eq!(fade(RED, 100.0).a, 255);
    assert_eq!(fade(RED, -0.01).a, 0);
    assert_eq!(fade(RED, f32::NAN).a, 0);
}
