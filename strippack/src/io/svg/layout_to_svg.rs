use crate::entities::Layout;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Line, Rectangle, Text, Title};

/// Draws a layout. The y-axis is flipped so that the floor of the strip is at the bottom of the drawing.
pub fn layout_to_svg(layout: &Layout, options: SvgDrawOptions, title: &str) -> Document {
    let theme = &options.theme;
    let strip_width = layout.width() as f32;
    let strip_height = layout.height() as f32;

    //flip the y-axis: svg has its origin in the top left corner
    let to_svg_y = |y: i32| strip_height - y as f32;

    let margin = 0.05 * f32::max(strip_width, strip_height);
    let vbox = (-margin, -3.0 * margin, strip_width + 2.0 * margin, strip_height + 4.0 * margin);

    let stroke_width = f32::min(strip_width, strip_height) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the left top of the strip
        let label_content = format!(
            "height: {} | width: {} | fitness: {:.3}% | {}",
            layout.height(),
            layout.strip.width,
            layout.fitness() * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -margin)
            .set("font-size", 0.8 * margin)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw strip
    let strip_group = Group::new()
        .set("id", "strip")
        .add(
            Rectangle::new()
                .set("x", 0.0)
                .set("y", 0.0)
                .set("width", layout.strip.width)
                .set("height", strip_height)
                .set("fill", format!("{}", theme.strip_fill))
                .set("stroke", "black")
                .set("stroke-width", 2.0 * stroke_width),
        )
        .add(Title::new(format!(
            "strip, width: {}, height: {}",
            layout.strip.width,
            layout.height()
        )));

    let grid_group = {
        let mut grid_group = Group::new()
            .set("id", "grid")
            .set("stroke", format!("{}", theme.grid_color))
            .set("stroke-opacity", theme.grid_opac)
            .set("stroke-width", 0.5 * stroke_width);
        if options.grid && options.grid_spacing > 0 {
            for x in (0..=layout.width()).step_by(options.grid_spacing as usize) {
                grid_group = grid_group.add(
                    Line::new()
                        .set("x1", x)
                        .set("y1", 0.0)
                        .set("x2", x)
                        .set("y2", strip_height),
                );
            }
            for y in (0..=layout.height()).step_by(options.grid_spacing as usize) {
                grid_group = grid_group.add(
                    Line::new()
                        .set("x1", 0.0)
                        .set("y1", to_svg_y(y))
                        .set("x2", strip_width)
                        .set("y2", to_svg_y(y)),
                );
            }
        }
        grid_group
    };

    //draw items
    let items_group = {
        let mut items_group = Group::new().set("id", "items");
        for pi in layout.placed_items() {
            let fill = match theme.tint_items {
                true => svg_util::blend_colors(theme.item_fill, svg_util::id_color(pi.id)),
                false => theme.item_fill,
            };
            let stroke = svg_util::change_brightness(fill, 0.5);
            let title = Title::new(format!(
                "item, id: {}, rotated: {}, bbox: [left: {}, bottom: {}, right: {}, top: {}]",
                pi.id,
                pi.is_rotated(),
                pi.left(),
                pi.bottom(),
                pi.right(),
                pi.top()
            ));
            let mut item_group = Group::new()
                .set("id", format!("item_{}", pi.id))
                .add(
                    Rectangle::new()
                        .set("x", pi.left())
                        .set("y", to_svg_y(pi.top()))
                        .set("width", pi.width())
                        .set("height", pi.height())
                        .set("fill", format!("{fill}"))
                        .set("fill-opacity", 0.8)
                        .set("stroke", format!("{stroke}"))
                        .set("stroke-width", stroke_width),
                )
                .add(title);
            if options.labels {
                let font_size = 0.4 * i32::min(pi.width(), pi.height()) as f32;
                item_group = item_group.add(
                    Text::new(pi.id.to_string())
                        .set("x", pi.left() as f32 + 0.5 * pi.width() as f32)
                        .set("y", to_svg_y(pi.bottom()) - 0.5 * pi.height() as f32)
                        .set("font-size", font_size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "central"),
                );
            }
            items_group = items_group.add(item_group);
        }
        items_group
    };

    Document::new()
        .set("viewBox", vbox)
        .add(strip_group)
        .add(grid_group)
        .add(items_group)
        .add(label)
}
