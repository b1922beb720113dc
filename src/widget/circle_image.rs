use glam::{Affine2, Vec2};
use renderer::{BitmapShader, Canvas, Color, Paint, PaintStyle, RasterImage, RectF, TileMode};
use tracing::{debug, trace, warn};

use crate::{
    engine::{
        assets::Assets,
        dirty::Dirty,
        input::{TouchAction, TouchEvent},
        ui::{Frame, Widget},
    },
    widget::{
        config::CircleImageConfig,
        geometry::{circle_bounds, circle_contains, cover_transform, stroke_bounds},
        source::{Drawable, ImageSource, rasterize},
    },
};

/// An image view that clips its bitmap to a circle, with an optional ring around the edge and an
/// optional highlight while it is pressed.
pub struct CircleImageView {
    image: Option<RasterImage>,
    image_transform: Option<Affine2>,

    bitmap_paint: Paint,
    stroke_paint: Paint,
    highlight_paint: Paint,

    frame: Frame,
    /// The square the circle is inscribed in.
    draw_bounds: RectF,
    stroke_bounds: RectF,

    highlight_enable: bool,
    pressed: bool,

    on_click: Option<Box<dyn FnMut()>>,
    invalidated: Dirty,
}

impl Default for CircleImageView {
    fn default() -> Self {
        Self::new(CircleImageConfig::default())
    }
}

impl CircleImageView {
    pub fn new(config: CircleImageConfig) -> Self {
        let mut view = Self {
            image: None,
            image_transform: None,

            bitmap_paint: Paint::anti_aliased(),
            stroke_paint: Paint::anti_aliased().with_style(PaintStyle::Stroke),
            highlight_paint: Paint::anti_aliased(),

            frame: Frame::default(),
            draw_bounds: RectF::ZERO,
            stroke_bounds: RectF::ZERO,

            highlight_enable: true,
            pressed: false,

            on_click: None,
            invalidated: Dirty::smudged(),
        };
        view.configure(config);
        view
    }

    /// Apply a declarative configuration to the paints and flags.
    pub fn configure(&mut self, config: CircleImageConfig) {
        self.stroke_paint.color = config.stroke_color;
        self.highlight_paint.color = config.highlight_color;
        self.highlight_enable = config.highlight_enable;
        // Also recomputes the stroke bounds and requests a redraw.
        self.set_stroke_width(config.stroke_width);
    }

    /// Replace the displayed bitmap. `None` or an empty bitmap leaves the image layer blank.
    pub fn set_image(&mut self, image: Option<RasterImage>) {
        let image = match image {
            Some(image) if image.is_empty() => {
                debug!("Ignoring empty bitmap {:?}", image);
                None
            }
            image => image,
        };

        self.bitmap_paint.shader = image
            .as_ref()
            .map(|image| BitmapShader::new(image.clone(), TileMode::Clamp, TileMode::Clamp));
        self.image = image;

        self.update_image_transform();
        self.invalidate();
    }

    /// Resolve `source` and display the result. Sources that fail to load leave the image layer
    /// blank.
    pub fn set_image_source(&mut self, source: ImageSource, assets: &Assets) {
        let image = match source.resolve(assets) {
            Ok(image) => image,
            Err(err) => {
                warn!("Could not load image source: {}", err);
                None
            }
        };
        self.set_image(image);
    }

    /// Display a drawable, rendered at its intrinsic size.
    pub fn set_drawable(&mut self, drawable: &dyn Drawable) {
        self.set_image(rasterize(drawable));
    }

    /// Called when the size or padding of the view changed.
    pub fn on_size_changed(&mut self, frame: Frame) {
        self.frame = frame;
        self.draw_bounds = circle_bounds(&frame);
        self.stroke_bounds = stroke_bounds(self.draw_bounds, self.stroke_paint.stroke_width);

        debug!(
            "Circle bounds {:?}, stroke bounds {:?} for {:?}",
            self.draw_bounds, self.stroke_bounds, frame
        );

        self.update_image_transform();
        self.invalidate();
    }

    fn update_image_transform(&mut self) {
        self.image_transform = self
            .image
            .as_ref()
            .map(|image| cover_transform(image.size, self.draw_bounds));

        if let (Some(shader), Some(transform)) =
            (self.bitmap_paint.shader.as_mut(), self.image_transform)
        {
            shader.set_local_matrix(transform);
        }
    }

    /// Paint the image, the ring and the highlight, in that order. Each layer is skipped when it
    /// has nothing to show.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if self.image.is_some() && !self.draw_bounds.is_empty() {
            canvas.draw_oval(self.draw_bounds, &self.bitmap_paint);
        }

        if self.stroke_paint.stroke_width > 0.0 {
            canvas.draw_oval(self.stroke_bounds, &self.stroke_paint);
        }

        if self.highlight_enable && self.pressed {
            canvas.draw_oval(self.draw_bounds, &self.highlight_paint);
        }
    }

    /// True if the point, in view coordinates, lies within the circle.
    pub fn hit_test(&self, x: f32, y: f32) -> bool {
        circle_contains(self.draw_bounds, Vec2::new(x, y))
    }

    /// Handle a touch event. Presses that start outside the circle are rejected so they reach
    /// whatever is behind the view. Returns true if the event was consumed.
    pub fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        let inside = self.hit_test(event.position.x, event.position.y);

        match event.action {
            TouchAction::Down => {
                if !inside {
                    trace!("Rejecting press outside the circle at {}", event.position);
                    return false;
                }
                self.pressed = true;
                self.invalidate();
                true
            }

            TouchAction::Up | TouchAction::Cancel => {
                let was_pressed = self.pressed;

                // The highlight always clears, even if the pointer left the circle.
                self.pressed = false;
                self.invalidate();

                if !inside {
                    trace!("Release outside the circle at {}", event.position);
                    return false;
                }

                if event.action == TouchAction::Up && was_pressed {
                    if let Some(on_click) = self.on_click.as_mut() {
                        on_click();
                    }
                }
                true
            }

            TouchAction::Move => self.pressed,
        }
    }

    /// Set the callback invoked when a press inside the circle is released inside the circle.
    pub fn set_on_click(&mut self, on_click: impl FnMut() + 'static) {
        self.on_click = Some(Box::new(on_click));
    }

    pub fn set_highlight_enable(&mut self, enable: bool) {
        self.highlight_enable = enable;
        self.invalidate();
    }

    pub fn set_highlight_color(&mut self, color: Color) {
        self.highlight_paint.color = color;
        self.invalidate();
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke_paint.color = color;
        self.invalidate();
    }

    /// Negative and NaN widths are treated as no stroke.
    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_paint.stroke_width = width.max(0.0);
        self.stroke_bounds = stroke_bounds(self.draw_bounds, self.stroke_paint.stroke_width);
        self.invalidate();
    }

    /// Request a redraw from the host.
    pub fn invalidate(&self) {
        self.invalidated.smudge();
    }
}

impl CircleImageView {
    pub fn image(&self) -> Option<&RasterImage> {
        self.image.as_ref()
    }

    /// Transform from bitmap space to view space. `None` without an image.
    pub fn image_transform(&self) -> Option<Affine2> {
        self.image_transform
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn circle_bounds(&self) -> RectF {
        self.draw_bounds
    }

    pub fn stroke_bounds(&self) -> RectF {
        self.stroke_bounds
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_paint.color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_paint.stroke_width
    }

    pub fn highlight_enable(&self) -> bool {
        self.highlight_enable
    }

    pub fn highlight_color(&self) -> Color {
        self.highlight_paint.color
    }
}

impl Widget for CircleImageView {
    fn layout(&mut self, frame: Frame) {
        self.on_size_changed(frame);
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        self.draw(canvas);
    }

    fn event(&mut self, event: &TouchEvent) -> bool {
        self.on_touch_event(event)
    }

    fn dirty(&self) -> &Dirty {
        &self.invalidated
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use glam::UVec2;
    use renderer::{RecordingCanvas, RenderCommand, SoftwareCanvas};

    use super::*;
    use crate::{
        engine::{
            assets::{ResourceId, tests::test_assets},
            ui::{Context, Padding, Size},
        },
        widget::source::{ColorDrawable, OvalDrawable},
    };

    fn record(view: &CircleImageView) -> Vec<RenderCommand> {
        let mut canvas = RecordingCanvas::new(UVec2::new(100, 100));
        view.draw(&mut canvas);
        canvas.commands().to_vec()
    }

    fn example_view() -> CircleImageView {
        let config = CircleImageConfig::default()
            .with_stroke(Color::RED, 4.0)
            .with_highlight(true, Color::from_argb(0x80000000));
        let mut view = CircleImageView::new(config);
        view.on_size_changed(Frame::unpadded(100, 100));
        view.set_image(Some(RasterImage::filled(50, 50, Color::BLUE)));
        view
    }

    #[test]
    fn end_to_end() {
        let mut view = example_view();

        assert_eq!(view.circle_bounds(), RectF::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(view.stroke_bounds(), RectF::new(2.0, 2.0, 98.0, 98.0));

        let transform = view.image_transform().unwrap();
        assert_eq!(transform.matrix2.x_axis.x, 2.0);
        assert_eq!(transform.matrix2.y_axis.y, 2.0);
        assert_eq!(transform.translation, Vec2::ZERO);

        assert!(view.on_touch_event(&TouchEvent::down(50.0, 50.0)));
        assert!(view.is_pressed());

        let commands = record(&view);
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            &commands[0],
            RenderCommand::Oval { bounds, paint }
                if *bounds == RectF::new(0.0, 0.0, 100.0, 100.0) && paint.shader.is_some()
        ));
        assert!(matches!(
            &commands[1],
            RenderCommand::Oval { bounds, paint }
                if *bounds == RectF::new(2.0, 2.0, 98.0, 98.0)
                    && paint.style == PaintStyle::Stroke
                    && paint.stroke_width == 4.0
                    && paint.color == Color::RED
        ));
        assert!(matches!(
            &commands[2],
            RenderCommand::Oval { bounds, paint }
                if *bounds == RectF::new(0.0, 0.0, 100.0, 100.0)
                    && paint.style == PaintStyle::Fill
                    && paint.color.to_argb() == 0x80000000
        ));

        assert!(view.on_touch_event(&TouchEvent::up(50.0, 50.0)));
        assert!(!view.is_pressed());

        // Inside the rectangle, but ~63.6 from the center of a radius 50 circle.
        assert!(!view.on_touch_event(&TouchEvent::down(5.0, 5.0)));
        assert!(!view.is_pressed());
        assert_eq!(record(&view).len(), 2);
    }

    #[test]
    fn hit_test_center_and_edge() {
        let view = example_view();
        assert!(view.hit_test(50.0, 50.0));
        assert!(view.hit_test(100.0, 50.0));
        assert!(!view.hit_test(100.01, 50.0));
        assert!(!view.hit_test(5.0, 5.0));
    }

    #[test]
    fn release_outside_clears_press_and_is_rejected() {
        let mut view = example_view();
        let clicks = Rc::new(Cell::new(0));
        view.set_on_click({
            let clicks = Rc::clone(&clicks);
            move || clicks.set(clicks.get() + 1)
        });

        assert!(view.on_touch_event(&TouchEvent::down(50.0, 50.0)));
        assert!(view.is_pressed());
        assert!(view.on_touch_event(&TouchEvent::moved(96.0, 50.0)));

        view.dirty().if_dirty(|| {});
        assert!(!view.on_touch_event(&TouchEvent::up(2.0, 2.0)));
        assert!(!view.is_pressed());
        assert!(view.dirty().is_dirty());
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn cancel_outside_clears_press_and_is_rejected() {
        let mut view = example_view();
        let clicks = Rc::new(Cell::new(0));
        view.set_on_click({
            let clicks = Rc::clone(&clicks);
            move || clicks.set(clicks.get() + 1)
        });

        assert!(view.on_touch_event(&TouchEvent::down(50.0, 50.0)));
        assert!(view.is_pressed());

        view.dirty().if_dirty(|| {});
        assert!(!view.on_touch_event(&TouchEvent::cancel(2.0, 2.0)));
        assert!(!view.is_pressed());
        assert!(view.dirty().is_dirty());
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn click_on_release_inside() {
        let mut view = example_view();
        let clicks = Rc::new(Cell::new(0));
        view.set_on_click({
            let clicks = Rc::clone(&clicks);
            move || clicks.set(clicks.get() + 1)
        });

        view.on_touch_event(&TouchEvent::down(40.0, 40.0));
        assert!(view.on_touch_event(&TouchEvent::up(60.0, 60.0)));
        assert_eq!(clicks.get(), 1);

        // A cancelled gesture is not a click.
        view.on_touch_event(&TouchEvent::down(40.0, 40.0));
        assert!(view.on_touch_event(&TouchEvent::cancel(60.0, 60.0)));
        assert!(!view.is_pressed());
        assert_eq!(clicks.get(), 1);

        // Neither is a release without a press.
        assert!(view.on_touch_event(&TouchEvent::up(50.0, 50.0)));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn move_is_only_consumed_while_pressed() {
        let mut view = example_view();
        assert!(!view.on_touch_event(&TouchEvent::moved(50.0, 50.0)));
        view.on_touch_event(&TouchEvent::down(50.0, 50.0));
        assert!(view.on_touch_event(&TouchEvent::moved(1.0, 1.0)));
        assert!(view.is_pressed());
    }

    #[test]
    fn missing_image_keeps_other_layers() {
        let mut view = example_view();
        view.set_image(None);
        assert!(view.image().is_none());
        assert!(view.image_transform().is_none());

        view.on_touch_event(&TouchEvent::down(50.0, 50.0));
        let commands = record(&view);
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].paint().style, PaintStyle::Stroke);
        assert!(commands.iter().all(|command| command.paint().shader.is_none()));

        view.set_image(Some(RasterImage::filled(0, 10, Color::RED)));
        assert!(view.image().is_none());
    }

    #[test]
    fn no_stroke_and_no_highlight() {
        let mut view = CircleImageView::default();
        view.on_size_changed(Frame::unpadded(40, 40));
        view.set_image(Some(RasterImage::filled(4, 4, Color::RED)));
        view.set_highlight_enable(false);

        view.on_touch_event(&TouchEvent::down(20.0, 20.0));
        assert!(view.is_pressed());

        let commands = record(&view);
        assert_eq!(commands.len(), 1);
        assert!(commands[0].paint().shader.is_some());
    }

    #[test]
    fn zero_sized_view_is_inert() {
        let mut view = example_view();
        view.on_size_changed(Frame::new(Size::new(10, 10), Padding::uniform(8)));

        assert!(view.circle_bounds().is_empty());
        assert!(!view.hit_test(9.0, 9.0));
        assert!(!view.on_touch_event(&TouchEvent::down(9.0, 9.0)));

        let mut canvas = SoftwareCanvas::new(10, 10);
        view.draw(&mut canvas);
        assert!(canvas.image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn oversized_padding_collapses_the_circle() {
        let mut view = example_view();
        view.on_size_changed(Frame::new(
            Size::new(100, 100),
            Padding::new(i32::MAX, 0, i32::MAX, 0),
        ));

        assert_eq!(view.circle_bounds().width(), 0.0);
        assert!(view.circle_bounds().is_empty());
        assert!(!view.hit_test(50.0, 50.0));

        let mut canvas = SoftwareCanvas::new(100, 100);
        view.draw(&mut canvas);
        assert!(canvas.image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn portrait_image_transform() {
        let mut view = CircleImageView::default();
        view.set_image(Some(RasterImage::filled(100, 200, Color::RED)));
        view.on_size_changed(Frame::unpadded(50, 50));

        let transform = view.image_transform().unwrap();
        assert_eq!(transform.matrix2.x_axis.x, 0.5);
        assert_eq!(transform.translation, Vec2::new(0.0, -25.0));
    }

    #[test]
    fn image_is_centered_in_padded_wide_view() {
        let mut view = CircleImageView::default();
        view.on_size_changed(Frame::new(Size::new(200, 100), Padding::uniform(10)));
        view.set_image(Some(RasterImage::filled(40, 40, Color::RED)));

        assert_eq!(view.circle_bounds(), RectF::new(60.0, 10.0, 140.0, 90.0));
        let transform = view.image_transform().unwrap();
        assert_eq!(transform.matrix2.x_axis.x, 2.0);
        assert_eq!(transform.translation, Vec2::new(60.0, 10.0));
    }

    #[test]
    fn stroke_width_updates_stroke_bounds() {
        let mut view = example_view();
        view.set_stroke_width(10.0);
        assert_eq!(view.stroke_bounds(), RectF::new(5.0, 5.0, 95.0, 95.0));

        view.set_stroke_width(-3.0);
        assert_eq!(view.stroke_width(), 0.0);
        assert_eq!(view.stroke_bounds(), view.circle_bounds());
        assert_eq!(record(&view).len(), 1);
    }

    #[test]
    fn setters_request_redraw() {
        let mut view = example_view();

        let setters: [&dyn Fn(&mut CircleImageView); 4] = [
            &|view: &mut CircleImageView| view.set_stroke_color(Color::GREEN),
            &|view: &mut CircleImageView| view.set_stroke_width(2.0),
            &|view: &mut CircleImageView| view.set_highlight_color(Color::WHITE),
            &|view: &mut CircleImageView| view.set_highlight_enable(false),
        ];
        for setter in setters {
            view.dirty().if_dirty(|| {});
            setter(&mut view);
            assert!(view.dirty().is_dirty());
        }

        assert_eq!(view.stroke_color(), Color::GREEN);
        assert_eq!(view.stroke_width(), 2.0);
        assert_eq!(view.highlight_color(), Color::WHITE);
        assert!(!view.highlight_enable());
    }

    #[test]
    fn instances_do_not_share_state() {
        let mut first = example_view();
        let mut second = CircleImageView::new(CircleImageConfig::default());
        second.on_size_changed(Frame::unpadded(20, 40));

        first.on_touch_event(&TouchEvent::down(50.0, 50.0));
        second.set_stroke_color(Color::GREEN);

        assert!(first.is_pressed());
        assert!(!second.is_pressed());
        assert_eq!(first.stroke_color(), Color::RED);
        assert_eq!(first.circle_bounds(), RectF::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(second.circle_bounds(), RectF::new(0.0, 10.0, 20.0, 30.0));
        assert!(first.image().is_some());
        assert!(second.image().is_none());
    }

    #[test]
    fn image_sources() {
        let mut assets = test_assets();
        assets.register_resource(ResourceId(7), "portrait.png");

        let mut view = CircleImageView::default();
        view.on_size_changed(Frame::unpadded(50, 50));

        view.set_image_source(ImageSource::Resource(ResourceId(7)), &assets);
        assert_eq!(view.image().map(|image| image.size), Some(UVec2::new(100, 200)));

        view.set_image_source(ImageSource::Uri("missing.png".to_string()), &assets);
        assert!(view.image().is_none());

        view.set_image_source(
            ImageSource::Bitmap(RasterImage::filled(8, 8, Color::RED)),
            &assets,
        );
        assert!(view.image().is_some());

        view.set_drawable(&ColorDrawable { color: Color::RED });
        assert!(view.image().is_none());

        view.set_drawable(&OvalDrawable {
            size: UVec2::new(10, 10),
            color: Color::GREEN,
        });
        assert_eq!(view.image().map(|image| image.size), Some(UVec2::new(10, 10)));
    }

    #[test]
    fn renders_pixels() {
        let mut view = CircleImageView::new(
            CircleImageConfig::default().with_highlight(true, Color::BLACK.with_alpha(128)),
        );
        view.on_size_changed(Frame::unpadded(20, 20));
        view.set_image(Some(RasterImage::filled(5, 5, Color::WHITE)));

        let mut canvas = SoftwareCanvas::new(20, 20);
        view.draw(&mut canvas);
        assert_eq!(canvas.pixel(10, 10), Color::WHITE);
        assert_eq!(canvas.pixel(0, 0), Color::TRANSPARENT);

        view.on_touch_event(&TouchEvent::down(10.0, 10.0));
        let mut canvas = SoftwareCanvas::new(20, 20);
        view.draw(&mut canvas);
        let pressed = canvas.pixel(10, 10);
        assert_eq!(pressed.alpha, 255);
        assert!(pressed.red < 200);
        assert_eq!(canvas.pixel(0, 0), Color::TRANSPARENT);
    }

    #[test]
    fn hosted_in_context() {
        let mut context = Context::new(example_view());
        let mut canvas = RecordingCanvas::new(UVec2::new(100, 100));

        context.resize(Frame::unpadded(100, 100));
        assert!(context.render(&mut canvas));
        assert!(!context.render(&mut canvas));
        assert_eq!(canvas.commands().len(), 2);

        // Several requests before the next paint collapse into one paint.
        context.widget_mut().set_stroke_color(Color::GREEN);
        context.widget_mut().set_stroke_width(6.0);
        canvas.clear_commands();
        assert!(context.render(&mut canvas));
        assert!(!context.render(&mut canvas));
        assert_eq!(canvas.commands().len(), 2);

        assert!(!context.dispatch(&TouchEvent::down(1.0, 1.0)));
        assert!(!context.render(&mut canvas));

        assert!(context.dispatch(&TouchEvent::down(50.0, 50.0)));
        canvas.clear_commands();
        assert!(context.render(&mut canvas));
        assert_eq!(canvas.commands().len(), 3);

        // Same frame, no new layout.
        context.resize(Frame::unpadded(100, 100));
        assert!(!context.render(&mut canvas));

        context.resize(Frame::unpadded(60, 100));
        assert_eq!(
            context.widget().circle_bounds(),
            RectF::new(0.0, 20.0, 60.0, 80.0)
        );
        assert!(context.render(&mut canvas));
    }
}
