//! Application shell
//!
//! Owns the shared font resources and a single active screen, and forwards
//! host lifecycle events (render, resize, dispose) to it.

use crate::config::Config;
use crate::font::{FontError, FontGenerator, GlyphFont};
use crate::line_diagram::LineDiagram;
use crate::render::Canvas;
use crate::stage::Frame;

/// A full-window view driven by the shell
pub trait Screen {
    fn render(&mut self, frame: &Frame, font: &GlyphFont, canvas: &mut dyn Canvas);

    /// Window size changed, in pixels
    fn resize(&mut self, width: u32, height: u32);

    /// Release rendering resources. Must be safe to call more than once.
    fn dispose(&mut self);
}

pub struct HinanaiGame {
    generator: FontGenerator,
    debug_font: GlyphFont,
    screen: Option<Box<dyn Screen>>,
    size: (u32, u32),
    disposed: bool,
}

impl HinanaiGame {
    /// Load the font, rasterize it and open the line diagram.
    /// Fails if the font file is missing or unreadable.
    pub async fn create(config: &Config, width: u32, height: u32) -> Result<Self, FontError> {
        let generator = FontGenerator::load(&config.font.path).await?;
        let debug_font = generator.generate(config.font.style())?;
        log::info!(
            "Rasterized {} at {}px",
            generator.path(),
            debug_font.style().size
        );

        let mut game = Self::with_fonts(generator, debug_font, width, height);
        game.set_screen(Box::new(LineDiagram::new(config.clear_color())));
        Ok(game)
    }

    pub fn with_fonts(generator: FontGenerator, debug_font: GlyphFont, width: u32, height: u32) -> Self {
        Self {
            generator,
            debug_font,
            screen: None,
            size: (width, height),
            disposed: false,
        }
    }

    /// Replace the active screen. The previous one is disposed; the new one
    /// receives the current window size.
    pub fn set_screen(&mut self, mut screen: Box<dyn Screen>) {
        if let Some(mut previous) = self.screen.take() {
            previous.dispose();
        }
        let (width, height) = self.size;
        screen.resize(width, height);
        self.screen = Some(screen);
        log::debug!("screen set ({}x{})", width, height);
    }

    #[cfg(test)]
    pub fn has_screen(&self) -> bool {
        self.screen.is_some()
    }

    #[cfg(test)]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn render(&mut self, frame: &Frame, canvas: &mut dyn Canvas) {
        if self.disposed {
            return;
        }
        if let Some(screen) = self.screen.as_mut() {
            screen.render(frame, &self.debug_font, canvas);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        if let Some(screen) = self.screen.as_mut() {
            screen.resize(width, height);
        }
    }

    /// Dispose the screen, then the font generator and glyph font
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(mut screen) = self.screen.take() {
            screen.dispose();
        }
        self.generator.dispose();
        self.debug_font.dispose();
        self.disposed = true;
        log::info!("Shut down cleanly");
    }
}
