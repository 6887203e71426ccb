//! Glyph rain backdrop
//!
//! Purely decorative: one drop per glyph column, each drawing a random katakana
//! glyph at its current row every frame. The canvas is never cleared; a faint
//! black wash each frame fades older glyphs into trails. Shares nothing with the
//! game state.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// First code point of the glyph range (katakana block)
const GLYPH_BASE: u32 = 0x30A0;
/// Number of glyphs in the range
const GLYPH_COUNT: u32 = 96;
/// Chance per frame that a drop past the bottom restarts at the top
const RESET_CHANCE: f64 = 0.025;

/// Overlay drawn each frame before the glyphs
pub const FADE_STYLE: &str = "rgba(0, 0, 0, 0.05)";
/// Glyph color
pub const GLYPH_STYLE: &str = "#0F0";

/// A glyph to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub ch: char,
    /// Baseline position in pixels
    pub x: f32,
    pub y: f32,
}

/// Column drops and their RNG
#[derive(Debug, Clone)]
pub struct Rain {
    cell: f32,
    height: f32,
    /// Current row per column
    drops: Vec<u32>,
    rng: Pcg32,
}

impl Rain {
    /// One column per full cell across `width`
    pub fn new(width: f32, height: f32, cell: f32, seed: u64) -> Self {
        let columns = if cell > 0.0 {
            (width / cell).max(0.0) as usize
        } else {
            0
        };
        Self {
            cell,
            height,
            drops: vec![0; columns],
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    /// Font for the 2D context
    pub fn font(&self) -> String {
        format!("{}px monospace", self.cell)
    }

    /// Advance every drop one row, returning the glyphs to draw
    ///
    /// Glyphs are emitted at the drop's row before it moves. A drop that has run
    /// off the bottom may restart from row 0 and then advances with the rest.
    pub fn advance(&mut self) -> Vec<Glyph> {
        let mut glyphs = Vec::with_capacity(self.drops.len());

        for (i, drop) in self.drops.iter_mut().enumerate() {
            let code = GLYPH_BASE + self.rng.random_range(0..GLYPH_COUNT);
            let ch = char::from_u32(code).unwrap_or('?');
            let y = *drop as f32 * self.cell;
            glyphs.push(Glyph {
                ch,
                x: i as f32 * self.cell,
                y,
            });

            if y > self.height && self.rng.random_bool(RESET_CHANCE) {
                *drop = 0;
            }
            *drop += 1;
        }

        glyphs
    }
}

/// Paints the rain on its own 2D canvas
#[cfg(target_arch = "wasm32")]
pub struct Painter {
    ctx: web_sys::CanvasRenderingContext2d,
    width: f64,
    height: f64,
    rain: Rain,
}

#[cfg(target_arch = "wasm32")]
impl Painter {
    pub fn new(canvas: &web_sys::HtmlCanvasElement, rain: Rain) -> Result<Self, wasm_bindgen::JsValue> {
        use wasm_bindgen::JsCast;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("2d context unavailable"))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            rain,
        })
    }

    /// Fade the previous frame and draw the next row of glyphs
    pub fn paint(&mut self) {
        self.ctx.set_fill_style_str(FADE_STYLE);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);

        self.ctx.set_fill_style_str(GLYPH_STYLE);
        self.ctx.set_font(&self.rain.font());

        let mut buf = [0u8; 4];
        for glyph in self.rain.advance() {
            let text = glyph.ch.encode_utf8(&mut buf);
            self.ctx.fill_text(text, glyph.x as f64, glyph.y as f64).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count() {
        assert_eq!(Rain::new(800.0, 600.0, 16.0, 1).columns(), 50);
        assert_eq!(Rain::new(810.0, 600.0, 16.0, 1).columns(), 50);
        assert_eq!(Rain::new(10.0, 600.0, 16.0, 1).columns(), 0);
        assert_eq!(Rain::new(800.0, 600.0, 0.0, 1).columns(), 0);
    }

    #[test]
    fn test_glyphs_come_from_katakana_block() {
        let mut rain = Rain::new(320.0, 600.0, 16.0, 9);
        for _ in 0..20 {
            for g in rain.advance() {
                let code = g.ch as u32;
                assert!((0x30A0..0x3100).contains(&code));
            }
        }
    }

    #[test]
    fn test_glyph_positions() {
        let mut rain = Rain::new(64.0, 600.0, 16.0, 2);
        let first = rain.advance();
        assert_eq!(first.len(), 4);
        assert!(first.iter().all(|g| g.y == 0.0));
        assert_eq!(first[3].x, 48.0);

        let second = rain.advance();
        assert!(second.iter().all(|g| g.y == 16.0));
    }

    #[test]
    fn test_drops_advance_until_past_bottom() {
        // 160px tall: rows 0..=10 are on screen, so no reset can happen before row 11
        let mut rain = Rain::new(160.0, 160.0, 16.0, 3);
        for frame in 1..=11u32 {
            rain.advance();
            assert!(rain.drops().iter().all(|&d| d == frame));
        }
    }

    #[test]
    fn test_drops_eventually_reset() {
        let mut rain = Rain::new(160.0, 160.0, 16.0, 4);
        for _ in 0..2000 {
            rain.advance();
        }
        // After thousands of frames with a 2.5% reset chance, some column restarted
        assert!(rain.drops().iter().any(|&d| d < 2000));
    }
}
