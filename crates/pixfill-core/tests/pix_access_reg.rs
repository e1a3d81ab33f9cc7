//! Pixel access regression test
//!
//! Tests pixel get/set on packed and padded rows, RGBA byte import and
//! export with a stride, copy-on-write between Pix and PixMut, and Box.

use pixfill_core::{Box, Pix, PixelDepth, color};
use pixfill_test::RegParams;

#[test]
fn pix_access_reg() {
    let mut rp = RegParams::new("pix_access");

    // --- Packed 32 bpp ---
    let pix = Pix::new(7, 5, PixelDepth::Bit32).unwrap();
    rp.compare_values(7.0, pix.wpl() as f64, 0.0);
    rp.compare_values(28.0, pix.stride() as f64, 0.0);
    let mut pm = pix.try_into_mut().unwrap();
    for y in 0..5 {
        for x in 0..7 {
            pm.set_pixel_unchecked(x, y, color::compose_rgba(x as u8, y as u8, 0x80, 0xff));
        }
    }
    let pix: Pix = pm.into();
    rp.compare_values(
        color::compose_rgba(6, 4, 0x80, 0xff) as f64,
        pix.get_pixel(6, 4).unwrap() as f64,
        0.0,
    );
    rp.compare_values(1.0, pix.get_pixel(7, 0).is_none() as u8 as f64, 0.0);
    rp.compare_values(1.0, (pix.get_rgba(3, 2) == Some((3, 2, 0x80, 0xff))) as u8 as f64, 0.0);

    // --- Copy on write ---
    let shared = pix.clone();
    rp.compare_values(2.0, pix.ref_count() as f64, 0.0);
    let mut copy = shared.to_mut();
    copy.set_pixel(0, 0, 0xdeadbeef).unwrap();
    let copy: Pix = copy.into();
    rp.compare_values(0x000080ff as f64, pix.get_pixel(0, 0).unwrap() as f64, 0.0);
    rp.compare_values(0xdeadbeef_u32 as f64, copy.get_pixel(0, 0).unwrap() as f64, 0.0);
    // Still shared with `pix`
    let shared = shared.try_into_mut().unwrap_err();
    drop(pix);
    rp.compare_values(1.0, shared.try_into_mut().is_ok() as u8 as f64, 0.0);

    // --- Padded rows survive a byte round trip ---
    let (w, h, stride) = (3u32, 4u32, 20usize);
    let bytes: Vec<u8> = (0..stride * h as usize).map(|i| (i * 7 % 251) as u8).collect();
    let pix = Pix::from_rgba_bytes(w, h, stride, &bytes).unwrap();
    rp.compare_values(5.0, pix.wpl() as f64, 0.0);
    rp.compare_values(stride as f64, pix.stride() as f64, 0.0);
    rp.compare_strings(&bytes, &pix.to_rgba_bytes().unwrap());
    let px = pix.get_pixel(2, 3).unwrap();
    let off = 3 * stride + 8;
    rp.compare_values(
        u32::from_be_bytes([bytes[off], bytes[off + 1], bytes[off + 2], bytes[off + 3]]) as f64,
        px as f64,
        0.0,
    );

    // Repainting pixels leaves padding words alone
    let mut pm = pix.to_mut();
    pm.set_all_arbitrary(0x01020304);
    let repainted: Pix = pm.into();
    let out = repainted.to_rgba_bytes().unwrap();
    for y in 0..h as usize {
        let row = &out[y * stride..(y + 1) * stride];
        rp.compare_strings(&[1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4], &row[..12]);
        rp.compare_strings(&bytes[y * stride + 12..(y + 1) * stride], &row[12..]);
    }

    // --- 1 bpp masks ---
    let mask = Pix::new(70, 3, PixelDepth::Bit1).unwrap();
    rp.compare_values(3.0, mask.wpl() as f64, 0.0);
    let mut pm = mask.try_into_mut().unwrap();
    for x in (0..70).step_by(3) {
        pm.set_pixel(x, 1, 1).unwrap();
    }
    let mask: Pix = pm.into();
    rp.compare_values(24.0, mask.count_pixels().unwrap() as f64, 0.0);
    rp.compare_values(1.0, mask.get_pixel(69, 1).unwrap() as f64, 0.0);
    rp.compare_values(0.0, mask.get_pixel(68, 1).unwrap() as f64, 0.0);

    // --- Box ---
    let b = Box::from_corners(9, 2, 4, 6);
    rp.compare_values(1.0, (b == Box::new_unchecked(4, 2, 6, 5)) as u8 as f64, 0.0);
    rp.compare_values(10.0, b.right() as f64, 0.0);
    rp.compare_values(7.0, b.bottom() as f64, 0.0);
    rp.compare_values(30.0, b.area() as f64, 0.0);
    rp.compare_values(1.0, b.contains_point(9, 6) as u8 as f64, 0.0);
    rp.compare_values(0.0, b.contains_point(10, 6) as u8 as f64, 0.0);

    assert!(rp.cleanup(), "pix_access regression test failed");
}

#[test]
fn pix_access_errors_reg() {
    assert!(Pix::new(0, 5, PixelDepth::Bit32).is_err());
    assert!(Pix::new(5, 0, PixelDepth::Bit1).is_err());
    assert!(Pix::new_with_wpl(5, 2, PixelDepth::Bit32, 4).is_err());
    assert!(Pix::new_with_wpl(40, 2, PixelDepth::Bit1, 2).is_ok());
    assert!(Pix::from_rgba_bytes(2, 2, 6, &[0; 16]).is_err());
    assert!(Pix::from_rgba_bytes(2, 2, 8, &[0; 15]).is_err());
    assert!(PixelDepth::from_bits(8).is_err());
    assert!(Box::new(0, 0, -1, 3).is_err());
}
