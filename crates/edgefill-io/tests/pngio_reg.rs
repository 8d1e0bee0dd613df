//! PNG file I/O regression test
//!
//! Covers path-level reads and writes: round trips, the two failure
//! families, and that a failed write leaves nothing behind.

use edgefill_core::{Pix, PixelDepth, color};
use edgefill_io::{IoError, read_image, write_image};
use edgefill_test::{RegParams, make_rect_rgb};
use std::fs;

#[test]
fn pngio_reg() {
    let mut rp = RegParams::new("pngio");
    let dir = tempfile::tempdir().unwrap();

    // --- Test 1: file round trip is exact ---
    let pix = make_rect_rgb(
        9,
        7,
        (2, 2, 6, 5),
        color::PURE_WHITE,
        color::compose_rgba(10, 20, 30, 255),
    );
    let path = dir.path().join("rect.png");
    write_image(&pix, &path).unwrap();
    let back = read_image(&path).unwrap();
    rp.compare_pix(&pix, &back);

    // --- Test 2: overwriting replaces the old content ---
    let other = make_rect_rgb(3, 3, (0, 0, 1, 1), color::PURE_WHITE, 0x0000_00ff);
    write_image(&other, &path).unwrap();
    let back = read_image(&path).unwrap();
    rp.compare_values(3.0, back.width() as f64, 0.0);

    // --- Test 3: leftover temporaries ---
    let entries = fs::read_dir(dir.path()).unwrap().count();
    rp.compare_values(1.0, entries as f64, 0.0);

    assert!(rp.cleanup(), "pngio regression test failed");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_image(dir.path().join("absent.png")).unwrap_err();
    assert!(matches!(err, IoError::Io(_)));
}

#[test]
fn test_malformed_file_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.png");
    fs::write(&path, b"\x89PNG\r\n\x1a\ntruncated").unwrap();
    let err = read_image(&path).unwrap_err();
    assert!(matches!(err, IoError::DecodeError(_)));
}

#[test]
fn test_write_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/out.png");
    let pix = Pix::new(2, 2, PixelDepth::Bit32).unwrap();
    assert!(matches!(write_image(&pix, &path), Err(IoError::Io(_))));
    assert!(!path.exists());
}

#[test]
fn test_failed_encode_keeps_existing_target() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keep.png");
    let good = make_rect_rgb(2, 2, (0, 0, 1, 1), color::PURE_WHITE, 0x0000_00ff);
    write_image(&good, &path).unwrap();

    let gray = Pix::new(2, 2, PixelDepth::Bit8).unwrap();
    assert!(matches!(
        write_image(&gray, &path),
        Err(IoError::EncodeError(_))
    ));

    let still = read_image(&path).unwrap();
    assert!(still.equals(&good));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
