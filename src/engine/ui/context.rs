use renderer::Canvas;
use tracing::trace;

use crate::engine::{
    input::TouchEvent,
    ui::{Frame, widget::Widget},
};

/// Hosts a single widget: feeds it frame changes and touch events and repaints it when it asked
/// for a redraw.
pub struct Context<W: Widget> {
    widget: W,
    frame: Option<Frame>,
}

impl<W: Widget> Context<W> {
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            frame: None,
        }
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// Assign a new frame to the widget. The widget is only laid out again if the frame changed.
    pub fn resize(&mut self, frame: Frame) {
        if self.frame == Some(frame) {
            return;
        }

        trace!("Frame changed: {:?} -> {:?}", self.frame, frame);
        self.frame = Some(frame);
        self.widget.layout(frame);
        self.widget.dirty().smudge();
    }

    pub fn dispatch(&mut self, event: &TouchEvent) -> bool {
        let consumed = self.widget.event(event);
        trace!("Dispatched {:?}, consumed: {}", event, consumed);
        consumed
    }

    /// Paint the widget if a redraw was requested since the last paint. Returns true if the
    /// widget was painted.
    pub fn render(&self, canvas: &mut dyn Canvas) -> bool {
        let widget = &self.widget;
        widget.dirty().if_dirty(|| widget.render(canvas))
    }
}
