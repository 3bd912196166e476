//! # Frame Tests
//!
//! End-to-end tests for the image → dot matrix → command frame → socket
//! pipeline. The printer firmware has no tolerance for malformed framing,
//! so these assert byte-exact output.

use pretty_assertions::assert_eq;

use image::{DynamicImage, Rgb, RgbImage};
use termica::{
    DotMatrix, PrinterConfig, TermicaError,
    protocol::bit_image,
    render::raster,
    transport::{self, TransportOptions},
};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// A solid-color source image.
fn solid_image(w: u32, h: u32, color: [u8; 3]) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, Rgb(color)))
}

/// A test config with a small calibration width so matrices stay tiny.
fn test_config(calibration_width: u16) -> PrinterConfig {
    PrinterConfig::GENERIC_80MM.with_calibration_width(calibration_width)
}

/// Rasterize and encode in one step.
fn frame_for(img: &DynamicImage, config: &PrinterConfig) -> Vec<u8> {
    let matrix = raster::rasterize(img, config).unwrap();
    bit_image::encode(&matrix).unwrap()
}

// ============================================================================
// FRAME STRUCTURE TESTS
// ============================================================================

#[test]
fn test_frame_prefix_and_suffix() {
    let frame = frame_for(&solid_image(4, 4, [0, 0, 0]), &test_config(8));

    // Init and band spacing open every frame
    assert_eq!(&frame[0..5], &[0x1B, 0x40, 0x1B, 0x33, 24]);
    // Spacing restore and partial cut close it
    let n = frame.len();
    assert_eq!(&frame[n - 6..n - 3], &[0x1B, 0x33, 30]);
    assert_eq!(&frame[n - 3..], &[29, 86, 1]);
}

#[test]
fn test_band_count_matches_height() {
    // Heights straddling band boundaries: ceil(height / 24) headers
    for (height, expected_bands) in [(8usize, 1usize), (24, 1), (25, 2), (72, 3), (73, 4)] {
        let matrix = DotMatrix::new(4, height, vec![false; 4 * height]).unwrap();
        let frame = bit_image::encode(&matrix).unwrap();
        let headers = frame
            .windows(3)
            .filter(|w| *w == [0x1B, 0x2A, 33])
            .count();
        assert_eq!(headers, expected_bands, "height {}", height);
    }
}

#[test]
fn test_checkerboard_matrix_known_bytes() {
    // The 2x2 [on, off / off, on] scenario: one band (2 < 24), rows 2..23
    // padded as "off". Every byte of the frame is pinned down.
    let matrix = DotMatrix::new(2, 2, vec![true, false, false, true]).unwrap();
    let frame = bit_image::encode(&matrix).unwrap();

    assert_eq!(
        frame,
        vec![
            0x1B, 0x40, // ESC @
            0x1B, 0x33, 24,   // ESC 3 24
            0x1B, 0x2A, 33, 2, 0, // ESC * 33 wLo wHi
            0x80, 0x00, 0x00, // column 0: row 0 on
            0x40, 0x00, 0x00, // column 1: row 1 on
            0x0A, // LF
            0x1B, 0x33, 30, // ESC 3 30
            29, 86, 1, // GS V 1
        ]
    );
}

#[test]
fn test_white_image_emits_empty_bands() {
    let frame = frame_for(&solid_image(4, 4, [255, 255, 255]), &test_config(8));

    // 8x8 matrix, one band: data sits between the header and the LF
    let data = &frame[10..10 + 8 * 3];
    assert!(data.iter().all(|&b| b == 0x00));
}

#[test]
fn test_black_image_fills_populated_rows() {
    // 8x8 all-black matrix: rows 0..7 populated, so the first slice of
    // every column is 0xFF and the two below (rows 8..23) pad to zero.
    let frame = frame_for(&solid_image(4, 4, [0, 0, 0]), &test_config(8));

    let data = &frame[10..10 + 8 * 3];
    for column in data.chunks(3) {
        assert_eq!(column, &[0xFF, 0x00, 0x00]);
    }
}

#[test]
fn test_encode_is_deterministic_end_to_end() {
    let img = solid_image(10, 30, [90, 90, 90]);
    let config = test_config(20);
    assert_eq!(frame_for(&img, &config), frame_for(&img, &config));
}

#[test]
fn test_decode_failure_produces_no_frame() {
    let err = raster::rasterize_bytes(b"definitely not an image", &test_config(8));
    assert!(matches!(err, Err(TermicaError::Decode(_))));
}

// ============================================================================
// TRANSPORT TESTS
// ============================================================================

#[tokio::test]
async fn test_print_delivers_exact_frame() {
    use tokio::io::AsyncReadExt;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        socket.read_to_end(&mut received).await.unwrap();
        received
    });

    let frame = frame_for(&solid_image(4, 4, [0, 0, 0]), &test_config(8));
    transport::print(&addr, &frame, &TransportOptions::default())
        .await
        .unwrap();

    let received = server.await.unwrap();
    assert_eq!(received, frame);
}

#[tokio::test]
async fn test_send_timeout_when_printer_stalls() {
    use std::time::Duration;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    // Accept the connection but never read, so the socket buffers fill up
    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(60)).await;
    });

    // Far larger than any loopback buffer
    let frame = vec![0u8; 64 * 1024 * 1024];
    let options = TransportOptions {
        io_timeout: Duration::from_millis(200),
        ..TransportOptions::default()
    };

    let result = transport::print(&addr, &frame, &options).await;
    assert!(matches!(
        result,
        Err(TermicaError::Timeout { stage: "send", .. })
    ));
}

#[tokio::test]
async fn test_job_deadline_bounds_the_whole_job() {
    use std::time::Duration;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(60)).await;
    });

    // Socket timeouts are generous; only the outer guard can fire
    let frame = vec![0u8; 64 * 1024 * 1024];
    let options = TransportOptions {
        job_deadline: Duration::from_millis(200),
        ..TransportOptions::default()
    };

    let result = transport::print(&addr, &frame, &options).await;
    assert!(matches!(
        result,
        Err(TermicaError::Timeout {
            stage: "print job",
            ..
        })
    ));
}
