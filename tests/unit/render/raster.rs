use super::*;
use crate::foundation::core::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::glyph::font::HEX_SYMBOLS;

fn painted(frame: &IndexedFrame) -> Vec<(u32, u32, u8)> {
    let mut out = Vec::new();
    for y in 0..frame.height() {
        for x in 0..frame.width() {
            let v = frame.index_at(x, y);
            if v != BACKGROUND_INDEX {
                out.push((x, y, v));
            }
        }
    }
    out
}

#[test]
fn gradient_index_follows_diagonal_formula() {
    let p = ColorPolicy::AnimatedGradient;
    for f in [0u64, 1, 7, 222, 223, 224, 10_000] {
        for dy in 0..8 {
            for dx in 0..8 {
                let expected = 32 + ((f + u64::from(dy) + u64::from(dx)) % 223);
                assert_eq!(
                    u64::from(p.index_for(FrameIndex(f), dx, dy)),
                    expected,
                    "f={f} dx={dx} dy={dy}"
                );
            }
        }
    }
}

#[test]
fn gradient_index_never_hits_background() {
    let p = ColorPolicy::AnimatedGradient;
    for f in 0..500u64 {
        for d in 0..15u32 {
            let v = p.index_for(FrameIndex(f), d.min(7), d.saturating_sub(7));
            assert!(v >= 32);
            assert!(v <= 254);
        }
    }
    assert_ne!(p.index_for(FrameIndex(u64::MAX), 7, 7), BACKGROUND_INDEX);
}

#[test]
fn monochrome_uses_foreground() {
    let p = ColorPolicy::for_mode(ColorMode::Mono);
    assert_eq!(p, ColorPolicy::Monochrome { foreground: 1 });
    assert_eq!(p.index_for(FrameIndex(99), 3, 4), 1);
}

#[test]
fn draw_glyph_paints_exactly_the_set_bits() {
    let mut frame = IndexedFrame::blank();
    draw_glyph(
        &mut frame,
        (16, 8),
        b'1',
        FrameIndex(0),
        ColorPolicy::Monochrome { foreground: 1 },
    );
    let glyph = glyph_for(b'1').unwrap();
    let expected: Vec<(u32, u32, u8)> = glyph
        .set_pixels()
        .map(|(dx, dy)| (16 + dx, 8 + dy, 1))
        .collect();
    let mut got = painted(&frame);
    got.sort_by_key(|&(x, y, _)| (y, x));
    assert_eq!(got, expected);
}

#[test]
fn draw_glyph_gradient_writes_formula_values() {
    let mut frame = IndexedFrame::blank();
    draw_glyph(
        &mut frame,
        (0, 0),
        b'f',
        FrameIndex(5),
        ColorPolicy::AnimatedGradient,
    );
    for (x, y, v) in painted(&frame) {
        assert_eq!(u64::from(v), 32 + ((5 + u64::from(x) + u64::from(y)) % 223));
    }
}

#[test]
fn unknown_symbol_is_a_no_op() {
    let mut frame = IndexedFrame::blank();
    for s in [b'G', b'x', b' ', b'\n'] {
        draw_glyph(&mut frame, (0, 0), s, FrameIndex(0), ColorPolicy::AnimatedGradient);
    }
    assert!(painted(&frame).is_empty());
}

#[test]
fn glyph_past_canvas_edge_is_clipped() {
    let mut frame = IndexedFrame::blank();
    draw_glyph(
        &mut frame,
        (CANVAS_WIDTH - 4, CANVAS_HEIGHT - 4),
        b'8',
        FrameIndex(0),
        ColorPolicy::Monochrome { foreground: 1 },
    );
    assert!(
        painted(&frame)
            .iter()
            .all(|&(x, y, _)| x < CANVAS_WIDTH && y < CANVAS_HEIGHT)
    );

    draw_glyph(
        &mut frame,
        (u32::MAX, u32::MAX),
        b'8',
        FrameIndex(0),
        ColorPolicy::Monochrome { foreground: 1 },
    );
}

#[test]
fn every_symbol_draws_something() {
    for &s in HEX_SYMBOLS {
        let mut frame = IndexedFrame::blank();
        draw_glyph(&mut frame, (0, 0), s, FrameIndex(0), ColorPolicy::AnimatedGradient);
        assert!(!painted(&frame).is_empty());
    }
}
