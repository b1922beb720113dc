use renderer::Canvas;

use crate::engine::{dirty::Dirty, input::TouchEvent, ui::Frame};

pub trait Widget {
    /// Called by the host when the size or padding of the widget changed.
    fn layout(&mut self, frame: Frame);

    /// Paint the widget onto the canvas.
    fn render(&self, canvas: &mut dyn Canvas);

    /// Handle a touch event. Returns true if the widget consumed the event and false if it
    /// should be passed on to whatever is behind the widget.
    fn event(&mut self, _event: &TouchEvent) -> bool {
        false
    }

    /// The widget's redraw request flag.
    fn dirty(&self) -> &Dirty;
}
