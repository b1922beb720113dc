use glam::UVec2;

use crate::{Canvas, Paint, RectF};

#[derive(Clone, Debug)]
pub enum RenderCommand {
    Rect { bounds: RectF, paint: Paint },
    Oval { bounds: RectF, paint: Paint },
}

impl RenderCommand {
    pub fn paint(&self) -> &Paint {
        match self {
            RenderCommand::Rect { paint, .. } | RenderCommand::Oval { paint, .. } => paint,
        }
    }
}

/// A canvas that only records the commands issued to it.
pub struct RecordingCanvas {
    size: UVec2,
    commands: Vec<RenderCommand>,
}

impl RecordingCanvas {
    pub fn new(size: UVec2) -> Self {
        Self {
            size,
            commands: Vec::default(),
        }
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> UVec2 {
        self.size
    }

    fn draw_rect(&mut self, bounds: RectF, paint: &Paint) {
        self.commands.push(RenderCommand::Rect {
            bounds,
            paint: paint.clone(),
        });
    }

    fn draw_oval(&mut self, bounds: RectF, paint: &Paint) {
        self.commands.push(RenderCommand::Oval {
            bounds,
            paint: paint.clone(),
        });
    }
}
