use crate::constants::PLACEHOLDER_SELECTOR;
use crate::dom;
use crate::input::{self, DragState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Move the effect over the page's placeholder and make it visible.
pub fn place_over_placeholder(document: &web::Document, effect: &web::HtmlElement) {
    let placeholder = match dom::query(document, PLACEHOLDER_SELECTOR) {
        Ok(el) => el,
        Err(e) => {
            log::warn!("[drag] {}; leaving panel at its CSS position", e);
            return;
        }
    };
    let rect = placeholder.get_bounding_client_rect();
    let style = effect.style();
    _ = style.set_property("top", &format!("{}px", rect.top()));
    _ = style.set_property("left", &format!("{}px", rect.left()));
    _ = style.set_property("opacity", "1");
}

pub fn wire_drag(effect: &web::HtmlElement) {
    let drag = Rc::new(RefCell::new(DragState::default()));
    wire_pointerdown(effect, drag.clone());
    wire_pointermove(effect, drag.clone());
    wire_pointerup(effect, drag);
}

fn wire_pointerdown(effect: &web::HtmlElement, drag: Rc<RefCell<DragState>>) {
    let el = effect.clone();
    dom::add_listener::<web::PointerEvent>(effect.as_ref(), "pointerdown", move |ev| {
        drag.borrow_mut()
            .begin(ev.pointer_id(), ev.client_x() as f64, ev.client_y() as f64);
        _ = el.set_pointer_capture(ev.pointer_id());
        // no native image drag or text selection under the pointer
        ev.prevent_default();
        _ = el.class_list().add_1("dragging");
    });
}

fn wire_pointermove(effect: &web::HtmlElement, drag: Rc<RefCell<DragState>>) {
    let el = effect.clone();
    dom::add_listener::<web::PointerEvent>(effect.as_ref(), "pointermove", move |ev| {
        let moved = drag
            .borrow_mut()
            .update(ev.pointer_id(), ev.client_x() as f64, ev.client_y() as f64);
        if let Some(offset) = moved {
            _ = el.style().set_property("transform", &input::translate_css(offset));
        }
    });
}

fn wire_pointerup(effect: &web::HtmlElement, drag: Rc<RefCell<DragState>>) {
    for name in ["pointerup", "pointercancel"] {
        let el = effect.clone();
        let drag = drag.clone();
        dom::add_listener::<web::PointerEvent>(effect.as_ref(), name, move |ev| {
            if drag.borrow_mut().end(ev.pointer_id()) {
                _ = el.release_pointer_capture(ev.pointer_id());
                _ = el.class_list().remove_1("dragging");
            }
        });
    }
}
