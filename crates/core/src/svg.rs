//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.

use lanechart_protocol::{Color, RenderCommand, TextAlign};

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` define the SVG viewBox dimensions.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64) -> String {
    let mut svg = String::with_capacity(commands.len() * 160);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif">"#,
    ));
    svg.push_str(&format!(
        r##"<rect width="{width}" height="{height}" fill="#ffffff"/>"##,
    ));

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                fill,
                border,
                label,
                ..
            } => {
                svg.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}{}>"#,
                    rect.x,
                    rect.y,
                    rect.w,
                    rect.h,
                    fill.to_hex(),
                    opacity_attr(*fill),
                    stroke_attr(*border),
                ));
                if let Some(label) = label {
                    svg.push_str(&format!("<title>{}</title>", escape_xml(label)));
                }
                svg.push_str("</rect>");
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                svg.push_str(&format!(
                    r#"<text x="{}" y="{}" fill="{}" font-size="{font_size}" text-anchor="{}" style="pointer-events:none">{}</text>"#,
                    position.x,
                    position.y,
                    color.to_hex(),
                    anchor(*align),
                    escape_xml(text),
                ));
            }
            RenderCommand::DrawLine {
                from,
                to,
                color,
                width: line_width,
            } => {
                svg.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{line_width}"/>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    color.to_hex(),
                ));
            }
            RenderCommand::BeginGroup { id, .. } => {
                svg.push_str(&format!(r#"<g id="{}">"#, escape_xml(id)));
            }
            RenderCommand::EndGroup => svg.push_str("</g>"),
        }
    }

    svg.push_str("</svg>");
    svg
}

fn anchor(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "start",
        TextAlign::Center => "middle",
        TextAlign::Right => "end",
    }
}

fn opacity_attr(color: Color) -> String {
    if color.a == 255 {
        String::new()
    } else {
        format!(r#" fill-opacity="{:.3}""#, f64::from(color.a) / 255.0)
    }
}

fn stroke_attr(border: Option<Color>) -> String {
    match border {
        Some(color) => format!(r#" stroke="{}" stroke-width="1""#, color.to_hex()),
        None => String::new(),
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
