//! # Lessons
//!
//! The two demo programs: showing a single image, and drawing the four
//! sprites of a color-keyed sprite sheet into the screen corners.

use crate::graphics::{blit, Rgb, Surface};
use crate::platform::WindowSettings;
use crate::sprites::ClipTable;
use crate::BlitResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which demo program to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lesson {
    /// Blit one image whole at the top-left corner
    ImageLoading,
    /// Blit the four quadrants of a sprite sheet into the screen corners
    SpriteSheet,
}

impl Lesson {
    /// Window caption.
    pub fn title(self) -> &'static str {
        match self {
            Lesson::ImageLoading => "Event test",
            Lesson::SpriteSheet => "Sprite Sheet Loading",
        }
    }

    /// Window settings for this lesson.
    pub fn window_settings(self) -> WindowSettings {
        WindowSettings::new(self.title())
    }

    /// Built-in asset path, color key and background.
    pub fn default_scene(self) -> SceneConfig {
        match self {
            Lesson::ImageLoading => SceneConfig {
                asset: PathBuf::from("x.png"),
                color_key: None,
                background: None,
            },
            Lesson::SpriteSheet => SceneConfig {
                asset: PathBuf::from("clay_man.png"),
                color_key: Some(Rgb::MAGENTA_KEY),
                background: Some(Rgb::WHITE),
            },
        }
    }

    /// Draws the lesson's frame onto `screen`.
    pub fn render(self, screen: &mut Surface, image: &Surface, scene: &SceneConfig) {
        if let Some(background) = scene.background {
            screen.fill_rect(None, background);
        }

        match self {
            Lesson::ImageLoading => {
                blit(0, 0, image, screen, None);
            }
            Lesson::SpriteSheet => {
                for (quadrant, clip) in ClipTable::default().iter() {
                    let (x, y) = quadrant.screen_offset();
                    let covered = blit(x, y, image, screen, Some(clip));
                    log::debug!("Drew {:?} sprite at {:?}", quadrant, covered);
                }
            }
        }
    }
}

/// Per-program settings that can be overridden from a JSON file.
///
/// # Examples
///
/// ```
/// use clipblit::{Lesson, Rgb, SceneConfig};
///
/// let base = Lesson::SpriteSheet.default_scene();
/// let scene = SceneConfig::merge_json(base, r#"{ "background": { "r": 0, "g": 0, "b": 0 } }"#).unwrap();
/// assert_eq!(scene.background, Some(Rgb::BLACK));
/// assert_eq!(scene.color_key, Some(Rgb::MAGENTA_KEY));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    /// Image file to load
    pub asset: PathBuf,
    /// Color made transparent on the loaded image
    pub color_key: Option<Rgb>,
    /// Color the screen is filled with before blitting
    pub background: Option<Rgb>,
}

impl SceneConfig {
    /// Applies the fields present in the JSON object `json` on top of `base`.
    /// An explicit `null` clears an optional field.
    pub fn merge_json(base: SceneConfig, json: &str) -> BlitResult<SceneConfig> {
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(overrides) = overrides else {
            return Err(<serde_json::Error as serde::de::Error>::custom(
                "scene config must be a JSON object",
            )
            .into());
        };

        let mut merged = serde_json::to_value(base)?;
        if let Some(fields) = merged.as_object_mut() {
            fields.extend(overrides);
        }
        Ok(serde_json::from_value(merged)?)
    }

    /// Reads overrides for `base` from the file at `path`.
    pub fn merge_file(base: SceneConfig, path: &Path) -> BlitResult<SceneConfig> {
        let json = std::fs::read_to_string(path)?;
        Self::merge_json(base, &json)
    }
}
