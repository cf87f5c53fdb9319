//! # Sprite Sheet Loading
//!
//! Loads the color-keyed `clay_man.png` sheet and draws its four sprites
//! into the corners of a white screen.

use clipblit::{window_conf, Lesson};
use macroquad::window::Conf;

fn conf() -> Conf {
    window_conf(&Lesson::SpriteSheet.window_settings())
}

#[macroquad::main(conf)]
async fn main() {
    clipblit::app::run(Lesson::SpriteSheet).await;
}
