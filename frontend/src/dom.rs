use roll_shared::{Bounds, Point};
use web_sys::{Element, MouseEvent, TouchEvent};
use yew::NodeRef;

pub fn mouse_point(event: &MouseEvent) -> Point {
    Point::new(event.client_x() as f64, event.client_y() as f64)
}

/// Position of the first touch point; further touches are ignored.
pub fn first_touch(event: &TouchEvent) -> Option<Point> {
    event
        .touches()
        .get(0)
        .map(|touch| Point::new(touch.client_x() as f64, touch.client_y() as f64))
}

/// Position of the touch point when exactly one finger is down.
pub fn single_touch(event: &TouchEvent) -> Option<Point> {
    only_touch(event.touches().length(), first_touch(event))
}

pub fn only_touch(count: u32, first: Option<Point>) -> Option<Point> {
    (count == 1).then_some(first).flatten()
}

/// Bounding box of a rendered node, `None` before it is mounted.
pub fn element_bounds(node: &NodeRef) -> Option<Bounds> {
    node.cast::<Element>().map(|element| {
        let rect = element.get_bounding_client_rect();
        Bounds {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    })
}

/// Appends a `<style>` block to the document head for the lifetime of a widget.
pub fn mount_style(css: &str) -> Option<Element> {
    let document = gloo_utils::document();
    let style = match document.create_element("style") {
        Ok(style) => style,
        Err(e) => {
            log::warn!("Failed to create style element: {:?}", e);
            return None;
        }
    };
    style.set_text_content(Some(css));
    if let Err(e) = gloo_utils::head().append_child(&style) {
        log::warn!("Failed to attach style element: {:?}", e);
        return None;
    }
    Some(style)
}

pub fn unmount_style(style: Option<Element>) {
    if let Some(style) = style {
        style.remove();
    }
}
