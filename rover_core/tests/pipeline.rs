// rover_core/tests/pipeline.rs

use approx::assert_abs_diff_eq;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use image::{GrayImage, ImageFormat, Luma, Rgb};
use rover_core::codec::decode_base64_image;
use rover_core::messages::fields;
use rover_core::prelude::*;
use std::cell::Cell;
use std::io::Cursor;

struct SteppedClock(Cell<Seconds>);

impl Clock for SteppedClock {
    fn now(&self) -> Seconds {
        self.0.get()
    }
}

/// Paints one more worldmap column as navigable on every call, the way a
/// perception step would accumulate detections.
struct ColumnPainter {
    next_column: u32,
}

impl SampleLocator for ColumnPainter {
    fn locate(&mut self, rover: &mut RoverState) -> SampleDetection {
        let height = rover.worldmap.height();
        for y in 0..height {
            rover.worldmap.put_pixel(self.next_column, y, Rgb([0, 0, 255]));
        }
        self.next_column += 1;
        rover.vision_image = rover.img.clone();
        SampleDetection {
            samples_located: self.next_column as usize / 2,
            map_add: rover.worldmap.clone(),
            plot_map: rover.worldmap.clone(),
        }
    }
}

fn camera_frame(shade: u8) -> String {
    let frame = Frame::from_pixel(320, 160, Rgb([shade, 100, 50]));
    let mut buf = Cursor::new(Vec::new());
    frame.write_to(&mut buf, ImageFormat::Png).unwrap();
    BASE64.encode(buf.into_inner())
}

fn tick(remaining: u32, speed: &str, shade: u8) -> TelemetryRecord {
    TelemetryRecord::new()
        .with(fields::SAMPLES_X, "10,2;20,9;30")
        .with(fields::SAMPLES_Y, "40;50;60,5")
        .with(fields::SAMPLE_COUNT, remaining.to_string())
        .with(fields::SPEED, speed)
        .with(fields::POSITION, "99,66;85,58")
        .with(fields::YAW, "4,2")
        .with(fields::PITCH, "0")
        .with(fields::ROLL, "0")
        .with(fields::THROTTLE, "0,2")
        .with(fields::STEERING_ANGLE, "0")
        .with(fields::NEAR_SAMPLE, "0")
        .with(fields::PICKING_UP, "0")
        .with(fields::IMAGE, camera_frame(shade))
}

/// A 40x40 world whose left half (20 columns, 800 pixels) is navigable.
fn rover() -> RoverState {
    let mask = GrayImage::from_fn(40, 40, |x, _| Luma([if x < 20 { 1 } else { 0 }]));
    RoverState::new(ground_truth_from_mask(&mask))
}

#[test]
fn ticks_accumulate_time_coverage_and_collections() {
    let mut rover = rover();
    let mut locator = ColumnPainter { next_column: 0 };
    let style = OverlayStyle::default();
    let clock = SteppedClock(Cell::new(500.0));

    let first = process_tick(&mut rover, &tick(3, "0", 10), &mut locator, &style, &clock).unwrap();
    assert_eq!(rover.total_time, 0.0);
    assert_eq!(rover.samples_to_find(), 3);
    assert_abs_diff_eq!(first.stats.perc_mapped, 5.0);
    assert_abs_diff_eq!(first.stats.fidelity, 100.0);

    for (i, remaining) in [3, 2, 2, 1].into_iter().enumerate() {
        clock.0.set(500.0 + 1.5 * (i as f64 + 1.0));
        process_tick(&mut rover, &tick(remaining, "1,1", 20), &mut locator, &style, &clock)
            .unwrap();
    }
    assert_abs_diff_eq!(rover.total_time, 6.0);
    assert_eq!(rover.samples_collected, 2);
    assert_eq!(rover.samples_pos().x, vec![10, 20, 30]);
    assert_abs_diff_eq!(rover.vel, 1.1);
    assert_eq!(rover.pos.as_slice(), &[99.66, 85.58]);

    // Five columns are painted so far. Columns 20 and up fall outside the truth.
    for _ in 0..20 {
        process_tick(&mut rover, &tick(1, "0", 30), &mut locator, &style, &clock).unwrap();
    }
    let last = process_tick(&mut rover, &tick(1, "0", 30), &mut locator, &style, &clock).unwrap();
    assert_eq!(last.stats.tot_nav_pix, 26 * 40);
    assert_eq!(last.stats.good_nav_pix, 800);
    assert_eq!(last.stats.bad_nav_pix, 6 * 40);
    assert_abs_diff_eq!(last.stats.perc_mapped, 100.0);
    assert_abs_diff_eq!(last.stats.fidelity, 76.9);
    assert_eq!(last.samples_located, 13);
}

#[test]
fn encoded_frames_match_source_dimensions() {
    let mut rover = rover();
    let mut locator = ColumnPainter { next_column: 0 };
    let clock = SteppedClock(Cell::new(0.0));

    let out = process_tick(
        &mut rover,
        &tick(3, "0", 10),
        &mut locator,
        &OverlayStyle::default(),
        &clock,
    )
    .unwrap();

    let map = decode_base64_image(&out.frames.map_image).unwrap();
    let vision = decode_base64_image(&out.frames.vision_image).unwrap();
    assert_eq!(map.dimensions(), rover.worldmap.dimensions());
    assert_eq!(vision.dimensions(), (320, 160));
}

#[test]
fn a_bad_tick_leaves_the_state_for_the_next_one() {
    let mut rover = rover();
    let mut locator = WorldmapPassthrough;
    let style = OverlayStyle::default();
    let clock = SteppedClock(Cell::new(0.0));

    process_tick(&mut rover, &tick(3, "0", 10), &mut locator, &style, &clock).unwrap();

    let broken = tick(2, "0", 10).with(fields::IMAGE, "@@not-an-image@@");
    let err = process_tick(&mut rover, &broken, &mut locator, &style, &clock).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Telemetry(TelemetryError::ImageDecode(_))
    ));
    // The image is decoded last, so every scalar field was already applied.
    assert_eq!(rover.samples_collected, 1);

    clock.0.set(2.0);
    process_tick(&mut rover, &tick(2, "0", 10), &mut locator, &style, &clock).unwrap();
    assert_abs_diff_eq!(rover.total_time, 2.0);
}
