//! HUD and game-over overlay

use macroquad::prelude::*;
use super::palette;

const TIMER_SIZE: u16 = 36;
const TITLE_SIZE: u16 = 72;
const BODY_SIZE: u16 = 36;

/// Timer label text
pub fn timer_label(seconds: u32) -> String {
    format!("Time: {}s", seconds)
}

/// Draw text with its top edge at `top` (macroquad positions text by baseline)
fn draw_text_top(text: &str, x: f32, top: f32, size: u16, color: Color, font: Option<&Font>) {
    let dims = measure_text(text, font, size, 1.0);
    draw_text_ex(
        text,
        x,
        top + dims.offset_y,
        TextParams {
            font,
            font_size: size,
            color,
            ..Default::default()
        },
    );
}

fn draw_text_centered(text: &str, center_x: f32, top: f32, size: u16, color: Color, font: Option<&Font>) {
    let dims = measure_text(text, font, size, 1.0);
    draw_text_top(text, center_x - dims.width / 2.0, top, size, color, font);
}

/// Elapsed time in the top-right corner
pub fn draw_timer(seconds: u32, view_width: f32, font: Option<&Font>) {
    draw_text_top(&timer_label(seconds), view_width - 150.0, 20.0, TIMER_SIZE, palette::INK, font);
}

/// Wash out the frozen scene and show the result
pub fn draw_game_over(final_time: u32, view_width: f32, view_height: f32, font: Option<&Font>) {
    draw_rectangle(0.0, 0.0, view_width, view_height, palette::OVERLAY);

    let center_x = view_width / 2.0;
    draw_text_centered("GAME OVER", center_x, view_height / 3.0, TITLE_SIZE, palette::ALERT, font);
    draw_text_centered(&format!("Score: {}", final_time), center_x, view_height / 2.0, BODY_SIZE, palette::INK, font);
    draw_text_centered("Press R to Restart", center_x, view_height / 2.0 + 50.0, BODY_SIZE, palette::INK, font);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_label() {
        assert_eq!(timer_label(0), "Time: 0s");
        assert_eq!(timer_label(125), "Time: 125s");
    }
}
