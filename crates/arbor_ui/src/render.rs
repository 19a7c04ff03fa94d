//! Draw surface.
//!
//! Handlers paint into a [`DrawList`] by recording [`RenderCommand`]s in paint
//! order. The host turns the finished frame into GPU work: batches split at
//! clip changes, and solid quads tessellated into [`UIVertex`] data.

use crate::geometry::Rect;
use crate::style::Color;

/// A render command for the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
    },
    /// Rectangle outline.
    RectOutline {
        /// Bounds.
        bounds: Rect,
        /// Stroke color.
        color: Color,
        /// Line width.
        width: f32,
    },
    /// Text anchored at its top-left corner.
    Text {
        /// Text content.
        text: String,
        /// X position.
        x: f32,
        /// Y position.
        y: f32,
        /// Text color.
        color: Color,
        /// Font size.
        font_size: f32,
    },
    /// Sprite from the atlas, scaled to the bounds.
    Sprite {
        /// Bounds.
        bounds: Rect,
        /// Sprite name in the atlas.
        name: String,
        /// Tint color.
        tint: Color,
    },
    /// Nine-slice sprite: corners keep their size, edges and center stretch.
    NineSlice {
        /// Bounds.
        bounds: Rect,
        /// Sprite name in the atlas.
        name: String,
        /// Corner size in pixels.
        border: f32,
    },
    /// Scissor rect (clip subsequent commands).
    PushClip {
        /// Clip bounds.
        bounds: Rect,
    },
    /// Pop scissor rect.
    PopClip,
}

/// A run of commands sharing one clip rect.
#[derive(Debug, Clone, Default)]
pub struct UIBatch {
    /// Commands in this batch.
    pub commands: Vec<RenderCommand>,
    /// Clip rect (if any).
    pub clip: Option<Rect>,
}

/// Command-list surface handed to handlers during draw.
pub struct DrawList {
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
    /// Clip stack.
    clip_stack: Vec<Rect>,
    /// Final batches for rendering.
    batches: Vec<UIBatch>,
}

impl DrawList {
    /// Creates an empty draw list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(1024),
            clip_stack: Vec::with_capacity(16),
            batches: Vec::with_capacity(16),
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
        self.batches.clear();
    }

    /// Adds a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Adds a filled rectangle.
    pub fn fill_rect(&mut self, bounds: Rect, color: Color) {
        self.push(RenderCommand::Rect { bounds, color });
    }

    /// Adds a rectangle outline.
    pub fn stroke_rect(&mut self, bounds: Rect, color: Color, width: f32) {
        self.push(RenderCommand::RectOutline { bounds, color, width });
    }

    /// Adds a text run.
    pub fn text(&mut self, text: impl Into<String>, x: f32, y: f32, color: Color, font_size: f32) {
        self.push(RenderCommand::Text {
            text: text.into(),
            x,
            y,
            color,
            font_size,
        });
    }

    /// Adds a sprite stretched to `bounds`.
    pub fn sprite(&mut self, bounds: Rect, name: impl Into<String>, tint: Color) {
        self.push(RenderCommand::Sprite {
            bounds,
            name: name.into(),
            tint,
        });
    }

    /// Adds a nine-slice sprite.
    pub fn nine_slice(&mut self, bounds: Rect, name: impl Into<String>, border: f32) {
        self.push(RenderCommand::NineSlice {
            bounds,
            name: name.into(),
            border,
        });
    }

    /// Pushes a clip rect, intersected with the current one.
    pub fn push_clip(&mut self, bounds: Rect) {
        let actual_clip = if let Some(current) = self.clip_stack.last() {
            current.intersection(&bounds).unwrap_or(Rect::ZERO)
        } else {
            bounds
        };

        self.clip_stack.push(actual_clip);
        self.commands.push(RenderCommand::PushClip { bounds: actual_clip });
    }

    /// Pops the current clip rect.
    pub fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_some() {
            self.commands.push(RenderCommand::PopClip);
        }
    }

    /// Returns the current clip rect.
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Commands recorded so far, in paint order.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Returns the total command count.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Ends the frame and returns the commands split into batches at clip changes.
    pub fn end_frame(&mut self) -> &[UIBatch] {
        self.batches.clear();
        let mut clips: Vec<Rect> = Vec::new();
        let mut current = UIBatch::default();

        for command in std::mem::take(&mut self.commands) {
            match command {
                RenderCommand::PushClip { bounds } => {
                    clips.push(bounds);
                    Self::flush(&mut self.batches, &mut current, Some(bounds));
                }
                RenderCommand::PopClip => {
                    clips.pop();
                    Self::flush(&mut self.batches, &mut current, clips.last().copied());
                }
                other => current.commands.push(other),
            }
        }
        Self::flush(&mut self.batches, &mut current, None);
        self.clip_stack.clear();

        &self.batches
    }

    fn flush(batches: &mut Vec<UIBatch>, current: &mut UIBatch, next_clip: Option<Rect>) {
        let finished = std::mem::replace(
            current,
            UIBatch {
                commands: Vec::new(),
                clip: next_clip,
            },
        );
        if !finished.commands.is_empty() {
            batches.push(finished);
        }
    }

    /// Tessellates every filled rectangle into two triangles.
    #[must_use]
    pub fn solid_vertices(&self) -> Vec<UIVertex> {
        let mut vertices = Vec::new();
        for command in &self.commands {
            if let RenderCommand::Rect { bounds, color } = command {
                let color = color.to_array();
                let (x0, y0, x1, y1) = (bounds.x, bounds.y, bounds.right(), bounds.bottom());
                vertices.extend_from_slice(&[
                    UIVertex::new(x0, y0, 0.0, 0.0, color),
                    UIVertex::new(x1, y0, 1.0, 0.0, color),
                    UIVertex::new(x1, y1, 1.0, 1.0, color),
                    UIVertex::new(x0, y0, 0.0, 0.0, color),
                    UIVertex::new(x1, y1, 1.0, 1.0, color),
                    UIVertex::new(x0, y1, 0.0, 1.0, color),
                ]);
            }
        }
        vertices
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

/// Vertex for UI rendering.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UIVertex {
    /// Position (x, y).
    pub position: [f32; 2],
    /// UV coordinates.
    pub uv: [f32; 2],
    /// Color (RGBA).
    pub color: [f32; 4],
}

impl UIVertex {
    /// Creates a new vertex.
    #[must_use]
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            color,
        }
    }

    /// Views a vertex slice as raw bytes for buffer upload.
    #[must_use]
    pub fn as_bytes(vertices: &[Self]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}
