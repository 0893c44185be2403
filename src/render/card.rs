//! Card surface painting and the default text card content.
//!
//! The surface is painted directly to the GPU rather than styled on a div so
//! the top card's rotation can be applied: an axis-aligned rounded quad for
//! resting cards, a rotated quad path when the card is tilted mid-drag.

use gpui::{PathBuilder, *};

use crate::constants::{CARD_BORDER_WIDTH, CARD_CORNER_RADIUS};
use crate::stack::CardColors;

/// The painted background layer of one card slot.
pub(crate) fn render_card_surface(rotation_degrees: f32, colors: CardColors) -> impl IntoElement {
    canvas(
        move |_bounds, _window, _cx| (),
        move |bounds, _data, window, _cx| {
            paint_card_surface(bounds, rotation_degrees, colors, window);
        },
    )
    .absolute()
    .size_full()
}

fn paint_card_surface(
    bounds: Bounds<Pixels>,
    rotation_degrees: f32,
    colors: CardColors,
    window: &mut Window,
) {
    // Soft drop shadow, slightly below the card.
    let shadow_bounds = Bounds {
        origin: point(bounds.origin.x, bounds.origin.y + px(4.0)),
        size: bounds.size,
    };

    if rotation_degrees.abs() < 0.01 {
        window.paint_quad(quad(
            shadow_bounds,
            px(CARD_CORNER_RADIUS),
            colors.shadow,
            px(0.0),
            colors.shadow,
            Default::default(),
        ));
        window.paint_quad(quad(
            bounds,
            px(CARD_CORNER_RADIUS),
            colors.surface,
            px(CARD_BORDER_WIDTH),
            colors.border,
            Default::default(),
        ));
        return;
    }

    // Tilted card: rounded corners give way to a rotated quad path.
    let corners = rotated_corners(bounds, rotation_degrees);

    paint_corner_path(PathBuilder::fill(), &shifted(&corners, 4.0), colors.shadow, window);
    paint_corner_path(PathBuilder::fill(), &corners, colors.surface, window);
    paint_corner_path(
        PathBuilder::stroke(px(CARD_BORDER_WIDTH)),
        &corners,
        colors.border,
        window,
    );
}

fn paint_corner_path(
    mut path: PathBuilder,
    corners: &[Point<Pixels>; 4],
    color: Hsla,
    window: &mut Window,
) {
    path.move_to(corners[0]);
    for corner in &corners[1..] {
        path.line_to(*corner);
    }
    path.close();
    if let Ok(built) = path.build() {
        window.paint_path(built, color);
    }
}

/// The card's four corners rotated around its center, clockwise for
/// positive degrees.
fn rotated_corners(bounds: Bounds<Pixels>, degrees: f32) -> [Point<Pixels>; 4] {
    let cx = f32::from(bounds.origin.x) + f32::from(bounds.size.width) / 2.0;
    let cy = f32::from(bounds.origin.y) + f32::from(bounds.size.height) / 2.0;
    let hw = f32::from(bounds.size.width) / 2.0;
    let hh = f32::from(bounds.size.height) / 2.0;

    let radians = degrees.to_radians();
    let (sin, cos) = radians.sin_cos();

    [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)].map(|(dx, dy)| {
        point(
            px(cx + dx * cos - dy * sin),
            px(cy + dx * sin + dy * cos),
        )
    })
}

fn shifted(corners: &[Point<Pixels>; 4], dy: f32) -> [Point<Pixels>; 4] {
    corners.map(|corner| point(corner.x, corner.y + px(dy)))
}

/// Default card content: a centered title, mirroring the plain text card
/// most embedders start from.
pub fn text_card(title: impl Into<SharedString>) -> AnyElement {
    div()
        .p(px(16.0))
        .text_size(px(16.0))
        .text_color(hsla(0.0, 0.0, 0.2, 1.0))
        .child(title.into())
        .into_any_element()
}
