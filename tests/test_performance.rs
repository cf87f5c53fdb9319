//! Performance tests for the software blitter

use clipblit::{blit, ClipTable, PixelFormat, Rgb, Surface};
use std::time::Instant;

#[test]
fn test_full_screen_blit_performance() {
    let mut image = Surface::new(640, 480, PixelFormat::DISPLAY).unwrap();
    image.fill_rect(None, Rgb::new(30, 60, 90));
    let mut screen = Surface::new(640, 480, PixelFormat::DISPLAY).unwrap();

    let start = Instant::now();
    let iterations = 100;

    for _ in 0..iterations {
        blit(0, 0, &image, &mut screen, None);
    }

    let elapsed = start.elapsed();
    let avg_frame_time = elapsed / iterations;

    println!("Average full screen blit time: {:?}", avg_frame_time);

    // Row copies should stay far below a 60 FPS frame budget even in debug builds
    assert!(
        avg_frame_time.as_millis() < 16,
        "Full screen blit too slow: {:?}",
        avg_frame_time
    );
}

#[test]
fn test_color_keyed_sprite_performance() {
    let mut sheet = Surface::new(150, 150, PixelFormat::DISPLAY).unwrap();
    sheet.fill_rect(None, Rgb::MAGENTA_KEY);
    sheet.set_color_key(Some(Rgb::MAGENTA_KEY));
    let mut screen = Surface::new(640, 480, PixelFormat::DISPLAY).unwrap();
    let clips = ClipTable::default();

    let start = Instant::now();
    let iterations = 100u32;

    for _ in 0..iterations {
        for (quadrant, clip) in clips.iter() {
            let (x, y) = quadrant.screen_offset();
            blit(x, y, &sheet, &mut screen, Some(clip));
        }
    }

    let avg = start.elapsed() / iterations;
    println!("Average four-sprite render time: {:?}", avg);
    assert!(avg.as_millis() < 16, "Sprite blits too slow: {:?}", avg);
}
