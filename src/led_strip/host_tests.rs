#![allow(missing_docs)]

use super::{Frame1d, Rgb, TYPICAL_STRIP_CORRECTION, color_corrected, colors, scale8};

#[test]
fn new_frame_is_all_black() {
    let frame = Frame1d::<8>::new();
    assert!(
        frame.iter().all(|pixel| *pixel == Rgb::new(0, 0, 0)),
        "a fresh frame must start all off"
    );
    assert_eq!(Frame1d::<8>::LEN, 8);
}

#[test]
fn filled_frame_repeats_the_color() {
    let frame = Frame1d::<4>::filled(colors::BLUE);
    assert!(frame.iter().all(|pixel| *pixel == colors::BLUE));
}

#[test]
fn set_writes_in_range_pixels() {
    let mut frame = Frame1d::<4>::new();
    frame.set(2, colors::RED);
    assert_eq!(frame[2], colors::RED);
    assert_eq!(frame[1], Rgb::new(0, 0, 0));
}

#[test]
fn set_absorbs_the_off_buffer_index() {
    let mut frame = Frame1d::<4>::new();
    frame.set(4, colors::RED);
    frame.set(usize::MAX, colors::RED);
    assert!(
        frame.iter().all(|pixel| *pixel == Rgb::new(0, 0, 0)),
        "writes at or past the frame length must be no-ops"
    );
}

#[test]
fn scale8_treats_255_as_identity() {
    assert_eq!(scale8(200, 255), 200);
    assert_eq!(scale8(0, 255), 0);
    assert_eq!(scale8(255, 255), 255);
}

#[test]
fn scale8_zero_blanks_the_channel() {
    assert_eq!(scale8(255, 0), 0);
}

#[test]
fn color_correction_scales_green_and_blue_down() {
    let corrected = color_corrected(Rgb::new(255, 255, 255));
    assert_eq!(corrected.r, 255, "red channel passes through");
    assert_eq!(corrected.g, TYPICAL_STRIP_CORRECTION.g);
    assert_eq!(corrected.b, TYPICAL_STRIP_CORRECTION.b);
    assert!(corrected.g < corrected.b, "green is corrected hardest");
}
