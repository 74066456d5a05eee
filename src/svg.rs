use facet_core::DotState;

/// SVG attributes carrying one dot's current samples.
#[inline]
pub fn dot_attributes(dot: &DotState) -> [(&'static str, String); 2] {
    [
        ("r", format!("{:.3}", dot.radius.current)),
        ("fill-opacity", format!("{:.3}", dot.opacity.current)),
    ]
}

/// Static attributes for the dot at `index`.
#[inline]
pub fn dot_position(
    index: usize,
    centers_x: &[f64],
    center_y: f64,
) -> Option<[(&'static str, String); 2]> {
    let cx = centers_x.get(index)?;
    Some([("cx", cx.to_string()), ("cy", center_y.to_string())])
}
