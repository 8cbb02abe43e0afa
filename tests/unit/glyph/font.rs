use super::*;

#[test]
fn every_hex_symbol_has_a_distinct_glyph() {
    let glyphs: Vec<&Glyph> = HEX_SYMBOLS
        .iter()
        .map(|&s| glyph_for(s).unwrap())
        .collect();
    for (i, a) in glyphs.iter().enumerate() {
        for b in &glyphs[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn ranks_follow_table_order() {
    for (i, &s) in HEX_SYMBOLS.iter().enumerate() {
        assert_eq!(symbol_rank(s), Some(i));
    }
}

#[test]
fn non_hex_symbols_have_no_glyph() {
    for s in [b'g', b'A', b'F', b' ', b'\0', b'/', b':', 0xFF] {
        assert!(glyph_for(s).is_none(), "symbol {s:#04x}");
    }
}

#[test]
fn glyph_bits_read_msb_first() {
    // '1' row 1 is 0x18: columns 3 and 4 set.
    let one = glyph_for(b'1').unwrap();
    let row1: Vec<u32> = (0..8).filter(|&dx| one.is_set(dx, 1)).collect();
    assert_eq!(row1, vec![3, 4]);
    assert!(!one.is_set(8, 1));
}

#[test]
fn glyphs_keep_blank_gutter_rows() {
    for &s in HEX_SYMBOLS {
        let g = glyph_for(s).unwrap();
        assert!(g.set_pixels().all(|(_, dy)| dy != 0 && dy != 7));
    }
}

#[test]
fn set_pixels_counts_popcount() {
    let g = glyph_for(b'8').unwrap();
    let expected: u32 = g.0.iter().map(|r| r.count_ones()).sum();
    assert_eq!(g.set_pixels().count() as u32, expected);
}
