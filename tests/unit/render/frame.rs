use super::*;
use crate::foundation::core::{COLS, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::glyph::font::glyph_for;

const MONO: ColorPolicy = ColorPolicy::Monochrome { foreground: 1 };

fn cell_matches_glyph(frame: &IndexedFrame, i: usize, symbol: u8) -> bool {
    let (ox, oy) = GridPos::from_index(i).pixel_origin();
    let glyph = glyph_for(symbol).unwrap();
    (0..GLYPH_HEIGHT).all(|dy| {
        (0..GLYPH_WIDTH).all(|dx| {
            let painted = frame.index_at(ox + dx, oy + dy) != 0;
            painted == glyph.is_set(dx, dy)
        })
    })
}

fn cell_is_blank(frame: &IndexedFrame, i: usize) -> bool {
    let (ox, oy) = GridPos::from_index(i).pixel_origin();
    (0..GLYPH_HEIGHT).all(|dy| (0..GLYPH_WIDTH).all(|dx| frame.index_at(ox + dx, oy + dy) == 0))
}

#[test]
fn blank_frame_is_canvas_sized_background() {
    let frame = IndexedFrame::blank();
    assert_eq!((frame.width(), frame.height()), (CANVAS_WIDTH, CANVAS_HEIGHT));
    assert_eq!(
        frame.as_indices().len(),
        (CANVAS_WIDTH * CANVAS_HEIGHT) as usize
    );
    assert!(frame.as_indices().iter().all(|&v| v == 0));
}

#[test]
fn single_byte_chunk_places_two_glyphs() {
    let frame = build_frame(b"41", FrameIndex(0), MONO);
    assert!(cell_matches_glyph(&frame, 0, b'4'));
    assert!(cell_matches_glyph(&frame, 1, b'1'));
    assert!(cell_is_blank(&frame, 2));
    assert!(cell_is_blank(&frame, COLS));
}

#[test]
fn symbols_wrap_onto_next_row() {
    let mut symbols = vec![b'0'; COLS];
    symbols.push(b'f');
    let frame = build_frame(&symbols, FrameIndex(0), MONO);
    assert!(cell_matches_glyph(&frame, COLS - 1, b'0'));
    assert!(cell_matches_glyph(&frame, COLS, b'f'));
    let (ox, oy) = GridPos::from_index(COLS).pixel_origin();
    assert_eq!((ox, oy), (0, GLYPH_HEIGHT));
}

#[test]
fn full_chunk_fills_last_cell_and_ignores_overflow() {
    let mut symbols = vec![b'a'; FRAME_CHARS];
    let full = build_frame(&symbols, FrameIndex(0), MONO);
    assert!(cell_matches_glyph(&full, FRAME_CHARS - 1, b'a'));

    symbols.extend_from_slice(b"ffff");
    let overflowed = build_frame(&symbols, FrameIndex(0), MONO);
    assert_eq!(full, overflowed);
}

#[test]
fn empty_chunk_is_all_background() {
    let frame = build_frame(b"", FrameIndex(3), ColorPolicy::AnimatedGradient);
    assert_eq!(frame, IndexedFrame::blank());
}

#[test]
fn gradient_frames_differ_by_frame_index() {
    let a = build_frame(b"ab", FrameIndex(0), ColorPolicy::AnimatedGradient);
    let b = build_frame(b"ab", FrameIndex(1), ColorPolicy::AnimatedGradient);
    assert_ne!(a, b);
    let c = build_frame(b"ab", FrameIndex(223), ColorPolicy::AnimatedGradient);
    assert_eq!(a, c);
}

#[test]
fn set_index_outside_canvas_is_dropped() {
    let mut frame = IndexedFrame::blank();
    frame.set_index(CANVAS_WIDTH, 0, 9);
    frame.set_index(0, CANVAS_HEIGHT, 9);
    assert_eq!(frame, IndexedFrame::blank());
    assert_eq!(frame.index_at(CANVAS_WIDTH + 10, 0), 0);
}

#[test]
fn rgb_expansion_uses_palette() {
    let frame = build_frame(b"8", FrameIndex(0), MONO);
    let rgb = frame.to_rgb_image(&Palette::two_color());
    assert_eq!(rgb.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    // '8' row 1 is 0x3C: x = 2..=5 are set.
    assert_eq!(rgb.get_pixel(2, 1).0, [255, 255, 255]);
    assert_eq!(rgb.get_pixel(0, 1).0, [0, 0, 0]);
}
