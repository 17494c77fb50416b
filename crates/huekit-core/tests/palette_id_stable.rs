use huekit_core::palette::builtin::D3_CATEGORY10;
use huekit_core::palette::id::{palette_id_16, palette_id_hex};

#[test]
fn palette_id_changes_when_order_changes() {
    let p = &*D3_CATEGORY10;
    assert_ne!(palette_id_16(p), palette_id_16(&p.reverse()));
}

#[test]
fn palette_id_is_stable_for_same_palette() {
    let p = &*D3_CATEGORY10;
    let a = palette_id_hex(p);
    let b = palette_id_hex(&p.clone());
    assert_eq!(a, b);
}
