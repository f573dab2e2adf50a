//! Status text rasterisation
//!
//! Glyphs are rasterised on the CPU with `ab_glyph` and emitted as one small
//! quad per covered pixel, so text shares the block pipeline.

use ab_glyph::{Font, FontArc, PxScale, ScaleFont, point};
use glam::Vec2;

use super::shapes::rect;
use super::vertex::Vertex;
use crate::consts::FONT_BYTES;

/// A loaded font at a fixed pixel size
pub struct TextFont {
    font: FontArc,
    scale: PxScale,
}

impl TextFont {
    /// The font compiled into the binary
    pub fn embedded(size: f32) -> anyhow::Result<Self> {
        Self::from_bytes(FONT_BYTES, size)
    }

    pub fn from_bytes(bytes: &'static [u8], size: f32) -> anyhow::Result<Self> {
        let font =
            FontArc::try_from_slice(bytes).map_err(|e| anyhow::anyhow!("parse font: {e}"))?;
        Ok(Self {
            font,
            scale: PxScale::from(size),
        })
    }

    /// Distance between consecutive baselines
    pub fn line_height(&self) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        scaled.height() + scaled.line_gap()
    }

    /// Lay out `text` with its top-left corner at `origin`; `\n` starts a new line
    pub fn layout(&self, text: &str, origin: Vec2, color: [f32; 4]) -> Vec<Vertex> {
        let scaled = self.font.as_scaled(self.scale);
        let line_height = self.line_height();
        let mut vertices = Vec::new();

        for (row, line) in text.lines().enumerate() {
            let baseline = origin.y + scaled.ascent() + row as f32 * line_height;
            let mut caret = origin.x;
            let mut previous = None;

            for c in line.chars() {
                let id = scaled.glyph_id(c);
                if let Some(prev) = previous {
                    caret += scaled.kern(prev, id);
                }
                let glyph = id.with_scale_and_position(self.scale, point(caret, baseline));
                caret += scaled.h_advance(id);
                previous = Some(id);

                // Whitespace has no outline
                let Some(outlined) = self.font.outline_glyph(glyph) else {
                    continue;
                };
                let bounds = outlined.px_bounds();
                outlined.draw(|x, y, coverage| {
                    if coverage <= 0.0 {
                        return;
                    }
                    let mut pixel = color;
                    pixel[3] *= coverage.min(1.0);
                    let pos = Vec2::new(bounds.min.x + x as f32, bounds.min.y + y as f32);
                    vertices.extend_from_slice(&rect(pos, Vec2::ONE, pixel));
                });
            }
        }

        vertices
    }
}
