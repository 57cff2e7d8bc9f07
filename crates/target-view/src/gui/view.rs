use cairo::Context;
use target_rings::geometry::{ArcDirection, PathElement};
use target_rings::style::{LabelStyle, StrokeStyle};
use target_rings::{Color, SegmentVisual, TargetView};

struct SegmentRenderer<'a> {
    visual: &'a SegmentVisual,
    stroke: &'a StrokeStyle,
    label: &'a LabelStyle,
    font_size: f64,
}

impl<'a> SegmentRenderer<'a> {
    fn draw(&self, cr: &Context) -> Result<(), cairo::Error> {
        self.draw_wedge(cr)?;
        self.draw_label(cr)
    }

    fn trace_path(&self, cr: &Context) {
        cr.new_path();
        for element in self.visual.path.elements() {
            match *element {
                PathElement::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    direction: ArcDirection::Clockwise,
                } => cr.arc(center.x, center.y, radius, start_angle, end_angle),
                PathElement::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    direction: ArcDirection::CounterClockwise,
                } => cr.arc_negative(center.x, center.y, radius, start_angle, end_angle),
                PathElement::Close => cr.close_path(),
            }
        }
    }

    fn draw_wedge(&self, cr: &Context) -> Result<(), cairo::Error> {
        self.trace_path(cr);
        set_source(cr, self.visual.fill);
        cr.fill_preserve()?;
        set_source(cr, self.stroke.color);
        cr.set_line_width(self.stroke.width);
        cr.stroke()
    }

    fn draw_label(&self, cr: &Context) -> Result<(), cairo::Error> {
        let text = &self.visual.label;
        set_source(cr, self.label.color);
        cr.select_font_face(
            &self.label.font_family,
            cairo::FontSlant::Normal,
            cairo::FontWeight::Normal,
        );
        cr.set_font_size(self.font_size);
        if let Ok(ext) = cr.text_extents(text) {
            // center the ink box on the anchor
            cr.move_to(
                self.visual.anchor.x - ext.width() / 2.0 - ext.x_bearing(),
                self.visual.anchor.y - ext.height() / 2.0 - ext.y_bearing(),
            );
            cr.show_text(text)?;
        }
        Ok(())
    }
}

fn set_source(cr: &Context, color: Color) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

pub fn draw(cr: &Context, target: &TargetView) -> Result<(), cairo::Error> {
    let Some(font_size) = target.font_size() else {
        return Ok(());
    };

    for visual in &target.visuals() {
        SegmentRenderer {
            visual,
            stroke: target.stroke(),
            label: target.label_style(),
            font_size,
        }
        .draw(cr)?;
    }
    Ok(())
}
