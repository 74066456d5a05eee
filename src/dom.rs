use crate::constants::*;
use crate::svg;
use facet_core::LoaderFrame;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Build the loader `<svg>` with its three circles, initialised from `frame`.
pub fn build_loader_svg(
    document: &web::Document,
    class_name: Option<&str>,
    frame: &LoaderFrame,
) -> anyhow::Result<(web::Element, Vec<web::Element>)> {
    let svg_el = create_svg_element(document, "svg")?;
    if let Some(class_name) = class_name {
        _ = svg_el.set_attribute("class", class_name);
    }
    _ = svg_el.set_attribute("fill", LOADER_FILL);
    _ = svg_el.set_attribute("width", LOADER_WIDTH);
    _ = svg_el.set_attribute("height", LOADER_HEIGHT);
    _ = svg_el.set_attribute("viewBox", LOADER_VIEW_BOX);

    let mut circles = Vec::with_capacity(frame.dots.len());
    for i in 0..frame.dots.len() {
        let circle = create_svg_element(document, "circle")?;
        if let Some(attrs) = svg::dot_position(i, &DOT_CENTERS_X, DOT_CENTER_Y) {
            for (name, value) in attrs {
                _ = circle.set_attribute(name, &value);
            }
        }
        svg_el
            .append_child(&circle)
            .map_err(|e| anyhow::anyhow!("append circle: {:?}", e))?;
        circles.push(circle);
    }
    paint_dots(&circles, frame);
    Ok((svg_el, circles))
}

/// Write the published samples onto the circles.
pub fn paint_dots(circles: &[web::Element], frame: &LoaderFrame) {
    for (circle, dot) in circles.iter().zip(frame.dots.iter()) {
        for (name, value) in svg::dot_attributes(dot) {
            _ = circle.set_attribute(name, &value);
        }
    }
}

fn create_svg_element(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))
}
