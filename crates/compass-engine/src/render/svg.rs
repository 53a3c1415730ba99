use crate::coords::Transform;
use crate::paint::Color;
use crate::scene::{CircleCmd, DrawCmd, DrawList, LineCmd, TextCmd};

/// Writes a [`DrawList`] out as a standalone SVG document.
///
/// Each item keeps its local coordinates; the recorded transform becomes a
/// `transform="matrix(..)"` attribute so rotated text stays rotated.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f32,
    height: f32,
    font_family: String,
}

impl SvgSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, font_family: "sans-serif".to_string() }
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Renders `list` in paint order.
    pub fn render(&self, list: &DrawList) -> String {
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height,
        );
        for item in list.iter() {
            let transform = transform_attr(item.transform);
            let element = match &item.cmd {
                DrawCmd::Circle(c) => circle(c, &transform),
                DrawCmd::Line(l) => line(l, &transform),
                DrawCmd::Text(t) => self.text(t, &transform),
            };
            out.push_str("  ");
            out.push_str(&element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }

    fn text(&self, t: &TextCmd, transform: &str) -> String {
        format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" {}{}>{}</text>",
            t.origin.x,
            t.origin.y,
            escape(&self.font_family),
            t.size,
            fill(t.color),
            transform,
            escape(&t.text),
        )
    }
}

fn circle(c: &CircleCmd, transform: &str) -> String {
    format!(
        "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}{}/>",
        c.center.x,
        c.center.y,
        c.radius,
        fill(c.color),
        transform,
    )
}

fn line(l: &LineCmd, transform: &str) -> String {
    format!(
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {} stroke-width=\"{}\"{}/>",
        l.from.x,
        l.from.y,
        l.to.x,
        l.to.y,
        stroke(l.color),
        l.width,
        transform,
    )
}

fn fill(c: Color) -> String {
    if c.is_opaque() {
        format!("fill=\"{}\"", c.to_hex_rgb())
    } else {
        format!("fill=\"{}\" fill-opacity=\"{}\"", c.to_hex_rgb(), c.a)
    }
}

fn stroke(c: Color) -> String {
    if c.is_opaque() {
        format!("stroke=\"{}\"", c.to_hex_rgb())
    } else {
        format!("stroke=\"{}\" stroke-opacity=\"{}\"", c.to_hex_rgb(), c.a)
    }
}

fn transform_attr(t: Transform) -> String {
    if t.is_identity() {
        String::new()
    } else {
        format!(" transform=\"matrix({} {} {} {} {} {})\"", t.a, t.b, t.c, t.d, t.e, t.f)
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::text::FontId;

    #[test]
    fn identity_items_have_no_transform_attribute() {
        let mut list = DrawList::new();
        list.push_circle(Vec2::new(100.0, 100.0), 100.0, Color::from_srgb_u8(0x2b, 0x2b, 0x2b, 0xff));
        let svg = SvgSurface::new(200.0, 200.0).render(&list);

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<circle cx=\"100\" cy=\"100\" r=\"100\" fill=\"#2b2b2b\"/>"), "{svg}");
        assert!(!svg.contains("transform"));
    }

    #[test]
    fn translated_items_carry_matrix() {
        let mut list = DrawList::new();
        list.translate(0.0, 12.0);
        list.push_line(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), Color::white(), 1.0);
        let svg = SvgSurface::new(10.0, 10.0).render(&list);

        assert!(svg.contains("transform=\"matrix(1 0 0 1 0 12)\""), "{svg}");
        assert!(svg.contains("stroke=\"#ffffff\""));
    }

    #[test]
    fn text_is_escaped() {
        let mut list = DrawList::new();
        list.push_text("<N&>", FontId::default(), 12.0, Color::white(), Vec2::new(0.0, 12.0));
        let svg = SvgSurface::new(10.0, 10.0).render(&list);

        assert!(svg.contains(">&lt;N&amp;&gt;</text>"), "{svg}");
    }

    #[test]
    fn translucent_fill_writes_opacity() {
        let mut list = DrawList::new();
        list.push_circle(Vec2::zero(), 1.0, Color::from_straight(1.0, 1.0, 1.0, 0.5));
        let svg = SvgSurface::new(10.0, 10.0).render(&list);

        assert!(svg.contains("fill-opacity=\"0.5\""), "{svg}");
    }

    #[test]
    fn labels_name_the_measuring_font() {
        let mut list = DrawList::new();
        list.push_text("N", FontId::default(), 12.0, Color::white(), Vec2::new(0.0, 12.0));

        let default = SvgSurface::new(10.0, 10.0).render(&list);
        assert!(default.contains("font-family=\"sans-serif\""), "{default}");

        let named = SvgSurface::new(10.0, 10.0).font_family("DejaVu Sans").render(&list);
        assert!(named.contains("font-family=\"DejaVu Sans\""), "{named}");
    }
}
