// crates/huekit-core/src/palette/id.rs
//
// Stable palette fingerprint. `Hash` is fine for in-process maps but is not
// stable across builds; this id is, so it can be printed and compared later.
//
// Digest input: for each color, len:u32 (LE) then the UTF-8 bytes.

use crate::palette::palette::ColorPalette;

fn digest(p: &ColorPalette) -> blake3::Hash {
    let mut h = blake3::Hasher::new();
    for c in p.colors() {
        h.update(&(c.len() as u32).to_le_bytes());
        h.update(c.as_bytes());
    }
    h.finalize()
}

/// First 16 bytes of the palette digest.
pub fn palette_id_16(p: &ColorPalette) -> [u8; 16] {
    let mut id = [0u8; 16];
    id.copy_from_slice(&digest(p).as_bytes()[..16]);
    id
}

/// [`palette_id_16`] as 32 lowercase hex chars.
pub fn palette_id_hex(p: &ColorPalette) -> String {
    digest(p).to_hex()[..32].to_string()
}
