//! Font generation
//!
//! A `FontGenerator` holds the raw TTF bytes loaded from disk; `generate`
//! rasterizes them at a fixed size into a `GlyphFont` that every text-drawing
//! actor shares. macroquad has no outline rasterizer, so the border is drawn
//! by stamping the text in the border color around the fill.

use macroquad::file::load_file;
use macroquad::prelude::*;

use crate::render::TextAnchor;

/// Error type for font loading
#[derive(Debug)]
pub enum FontError {
    /// The font file could not be read
    Load { path: String, message: String },
    /// The bytes were read but are not a usable TTF
    Rasterize(String),
    /// The generator was already disposed
    Released,
}

impl std::fmt::Display for FontError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontError::Load { path, message } => write!(f, "failed to load font {}: {}", path, message),
            FontError::Rasterize(e) => write!(f, "failed to rasterize font: {}", e),
            FontError::Released => write!(f, "font generator already disposed"),
        }
    }
}

impl std::error::Error for FontError {}

/// Rasterization parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontStyle {
    /// Pixel size glyphs are rasterized at
    pub size: u16,
    pub color: Color,
    pub border_color: Color,
    /// Border thickness in pixels (0 = no border)
    pub border_width: u16,
}

/// Loaded-but-not-rasterized font file
pub struct FontGenerator {
    path: String,
    bytes: Option<Vec<u8>>,
}

impl FontGenerator {
    /// Read a TTF file through macroquad's file loader (works on native and WASM)
    pub async fn load(path: &str) -> Result<Self, FontError> {
        let bytes = load_file(path).await.map_err(|e| FontError::Load {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        log::info!("Loaded font file {} ({} bytes)", path, bytes.len());
        Ok(Self::from_bytes(path, bytes))
    }

    pub fn from_bytes(path: &str, bytes: Vec<u8>) -> Self {
        Self {
            path: path.to_string(),
            bytes: Some(bytes),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Rasterize the ASCII range at `style.size`
    pub fn generate(&self, style: FontStyle) -> Result<GlyphFont, FontError> {
        let bytes = self.bytes.as_ref().ok_or(FontError::Released)?;
        let face = load_ttf_font_from_bytes(bytes).map_err(|e| FontError::Rasterize(e.to_string()))?;
        face.populate_font_cache(&Font::ascii_character_list(), style.size);
        Ok(GlyphFont {
            face: Some(face),
            style,
            released: false,
        })
    }

    #[cfg(test)]
    pub fn is_released(&self) -> bool {
        self.bytes.is_none()
    }

    /// Drop the TTF bytes. Returns false if they were already released.
    pub fn dispose(&mut self) -> bool {
        self.bytes.take().is_some()
    }
}

/// Rasterized font plus the style it was generated with
pub struct GlyphFont {
    face: Option<Font>,
    style: FontStyle,
    released: bool,
}

impl GlyphFont {
    /// Font backed by macroquad's built-in face
    #[cfg(test)]
    pub fn builtin(style: FontStyle) -> Self {
        Self {
            face: None,
            style,
            released: false,
        }
    }

    pub fn style(&self) -> &FontStyle {
        &self.style
    }

    #[cfg(test)]
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Release the glyph atlas. Returns false if it was already released.
    pub fn dispose(&mut self) -> bool {
        if self.released {
            return false;
        }
        self.face = None;
        self.released = true;
        true
    }

    /// Draw `text` with its `anchor` corner at pixel (`x`, `y`).
    /// Must be called with the default (pixel) camera active.
    pub fn draw(&self, text: &str, x: f32, y: f32, anchor: TextAnchor) {
        if self.released {
            log::warn!("draw after font release: {:?}", text);
            return;
        }

        let dims = measure_text(text, self.face.as_ref(), self.style.size, 1.0);
        let baseline = baseline_for(y, anchor, dims.height, dims.offset_y);

        let params = |color: Color| TextParams {
            font: self.face.as_ref(),
            font_size: self.style.size,
            color,
            ..Default::default()
        };
        for offset in border_offsets(self.style.border_width) {
            draw_text_ex(text, x + offset.x, baseline + offset.y, params(self.style.border_color));
        }
        draw_text_ex(text, x, baseline, params(self.style.color));
    }
}

/// Pixel y of the text baseline for a box anchored at `y`.
/// `offset_y` is the ascent above the baseline, `height` the full box.
fn baseline_for(y: f32, anchor: TextAnchor, height: f32, offset_y: f32) -> f32 {
    match anchor {
        TextAnchor::TopLeft => y + offset_y,
        TextAnchor::BottomLeft => y - (height - offset_y),
    }
}

/// Offsets at which the border copy of the text is stamped
pub fn border_offsets(width: u16) -> Vec<Vec2> {
    if width == 0 {
        return Vec::new();
    }
    let w = width as f32;
    vec![
        vec2(-w, 0.0),
        vec2(w, 0.0),
        vec2(0.0, -w),
        vec2(0.0, w),
        vec2(-w, -w),
        vec2(w, -w),
        vec2(-w, w),
        vec2(w, w),
    ]
}
