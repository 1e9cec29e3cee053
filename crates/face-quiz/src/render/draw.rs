//! Canvas draw list.
//!
//! The game describes each frame as an ordered list of 2D canvas commands.
//! The web bridge replays the list onto a `CanvasRenderingContext2d`; tests
//! inspect it directly.

use glam::Vec2;

/// An sRGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BACKGROUND: Color = Color::rgb(0x0A, 0x0A, 0x0A);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#0A0A0A`.
    pub fn as_css(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Horizontal anchor of a text run, mirroring canvas `textAlign`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Font and colour for a text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size_px: f32,
    pub family: &'static str,
    pub color: Color,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn new(size_px: f32) -> Self {
        Self {
            size_px,
            family: "Courier",
            color: Color::WHITE,
            align: TextAlign::Left,
        }
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Canvas `font` shorthand, e.g. `24px Courier`.
    pub fn font(&self) -> String {
        format!("{}px {}", self.size_px, self.family)
    }
}

/// One canvas operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole canvas to transparent.
    Clear,
    /// Fill a rectangle; `pos` is the top-left corner.
    FillRect { pos: Vec2, size: Vec2, color: Color },
    /// Outline a rectangle; `pos` is the top-left corner.
    StrokeRect { pos: Vec2, size: Vec2, color: Color, line_width: f32 },
    /// Draw an image fetched from `url`; `pos` is the top-left corner.
    Image { url: String, pos: Vec2, size: Vec2 },
    /// Fill text with its baseline at `pos`.
    Text { text: String, pos: Vec2, style: TextStyle },
}

/// Ordered draw commands for one frame.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(32),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.push(DrawCommand::FillRect { pos, size, color });
    }

    pub fn stroke_rect(&mut self, pos: Vec2, size: Vec2, color: Color, line_width: f32) {
        self.push(DrawCommand::StrokeRect { pos, size, color, line_width });
    }

    /// Draw an image of `size` centred on `center`.
    pub fn image_centered(&mut self, url: &str, center: Vec2, size: Vec2) {
        self.push(DrawCommand::Image {
            url: url.to_owned(),
            pos: center - size / 2.0,
            size,
        });
    }

    pub fn text(&mut self, text: impl Into<String>, pos: Vec2, style: TextStyle) {
        self.push(DrawCommand::Text {
            text: text.into(),
            pos,
            style,
        });
    }

    /// Stack `lines` downwards from `top`, `spacing` pixels apart.
    /// Empty lines still take up space.
    pub fn text_block<S: AsRef<str>>(&mut self, lines: &[S], x: f32, top: f32, spacing: f32, style: &TextStyle) {
        for (i, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if line.is_empty() {
                continue;
            }
            self.text(line, Vec2::new(x, top + i as f32 * spacing), style.clone());
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every text run in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Every image URL in draw order.
    pub fn image_urls(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Image { url, .. } => Some(url.as_str()),
            _ => None,
        })
    }
}
