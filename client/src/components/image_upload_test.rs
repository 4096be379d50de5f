use super::*;

#[test]
fn gate_passes_jpeg_and_png() {
    assert!(accepts("image/jpeg"));
    assert!(accepts("image/png"));
}

#[test]
fn gate_blocks_every_other_declared_type() {
    for mime in [
        "image/gif",
        "image/webp",
        "image/tiff",
        "application/pdf",
        "video/mp4",
        "",
    ] {
        assert!(!accepts(mime), "{mime} should be rejected");
    }
}
