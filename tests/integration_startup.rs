//! Integration test driving both lessons end to end on the headless platform.

use clipblit::{
    BlitResult, Driver, DriverState, ErrorKind, Event, HeadlessPlatform, Lesson, SceneConfig,
};
use image::{Rgb, RgbImage};
use std::path::Path;
use tempfile::TempDir;

fn write_image(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.join(name);
    RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 40]))
        .save(&path)
        .unwrap();
    path
}

fn scene_for(lesson: Lesson, asset: std::path::PathBuf) -> SceneConfig {
    SceneConfig {
        asset,
        ..lesson.default_scene()
    }
}

#[test]
fn test_image_lesson_runs_to_quit() -> BlitResult<()> {
    let dir = TempDir::new()?;
    let asset = write_image(dir.path(), "x.png", 32, 24);
    let platform = HeadlessPlatform::new().with_batches(vec![vec![Event::Quit]]);
    let mut driver = Driver::new(
        Lesson::ImageLoading,
        scene_for(Lesson::ImageLoading, asset),
        platform,
    );

    driver.initialize()?;
    assert_eq!(driver.state(), DriverState::Initialized);
    driver.load()?;
    assert_eq!(driver.state(), DriverState::Loaded);
    driver.render()?;
    assert_eq!(driver.state(), DriverState::Rendered);

    let cycles = tokio_test::block_on(driver.run())?;
    assert_eq!(cycles, 1);
    assert_eq!(driver.state(), DriverState::Terminated);

    let window = driver.platform().window().unwrap();
    assert_eq!(window.title, "Event test");
    assert_eq!((window.width, window.height, window.bits_per_pixel), (640, 480, 32));
    assert_eq!(driver.platform().presents(), 1);

    let report = driver.teardown();
    assert_eq!(report.surfaces_released, 1);
    assert!(report.platform_released);

    let again = driver.teardown();
    assert_eq!(again.surfaces_released, 0);
    assert!(!again.platform_released);
    assert_eq!(driver.platform().releases(), 1);

    Ok(())
}

#[test]
fn test_quit_is_handled_after_the_whole_batch() -> BlitResult<()> {
    let dir = TempDir::new()?;
    let asset = write_image(dir.path(), "clay_man.png", 150, 150);
    let platform = HeadlessPlatform::new().with_batches(vec![
        vec![],
        vec![Event::Quit, Event::Quit],
        vec![Event::Quit],
    ]);
    let mut driver = Driver::new(
        Lesson::SpriteSheet,
        scene_for(Lesson::SpriteSheet, asset),
        platform,
    );

    let cycles = tokio_test::block_on(driver.execute())?;

    assert_eq!(cycles, 2);
    assert_eq!(driver.platform().pending_batches(), 1);
    assert_eq!(driver.platform().polls(), 2);
    assert!(driver.assets().is_empty());
    assert_eq!(driver.platform().releases(), 1);
    Ok(())
}

#[test]
fn test_frame_is_presented_once() -> BlitResult<()> {
    let dir = TempDir::new()?;
    let asset = write_image(dir.path(), "x.png", 8, 8);
    let platform = HeadlessPlatform::new().with_batches(vec![vec![]; 5]);
    let mut driver = Driver::new(
        Lesson::ImageLoading,
        scene_for(Lesson::ImageLoading, asset),
        platform,
    );

    let cycles = tokio_test::block_on(driver.execute())?;

    // Five empty batches, then the script runs out and yields a quit.
    assert_eq!(cycles, 6);
    assert_eq!(driver.platform().presents(), 1);
    Ok(())
}

#[test]
fn test_missing_asset_fails_with_load_error() {
    let mut driver = Driver::new(
        Lesson::ImageLoading,
        scene_for(Lesson::ImageLoading, "does/not/exist.png".into()),
        HeadlessPlatform::new(),
    );

    let err = tokio_test::block_on(driver.execute()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Load);
    assert_eq!(err.exit_code(), 1);
    assert!(driver.assets().is_empty());
    assert_eq!(driver.platform().presents(), 0);
    assert_eq!(driver.platform().releases(), 1);
}

#[test]
fn test_present_failure_tears_down() -> BlitResult<()> {
    let dir = TempDir::new()?;
    let asset = write_image(dir.path(), "x.png", 8, 8);
    let platform = HeadlessPlatform::new().failing_present("flip failed");
    let mut driver = Driver::new(
        Lesson::ImageLoading,
        scene_for(Lesson::ImageLoading, asset),
        platform,
    );

    let err = tokio_test::block_on(driver.execute()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Present);
    assert_eq!(driver.state(), DriverState::Terminated);
    assert!(driver.assets().is_empty());
    assert_eq!(driver.platform().polls(), 0);
    Ok(())
}
