use crate::panel;
use crate::surface::DomSurface;
use glass_core::{sync, ControlValue, Field, GlassParams};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Session state: the current snapshot and the surface it is applied to.
pub struct GlassApp {
    params: RefCell<GlassParams>,
    surface: RefCell<DomSurface>,
    panel: web::Element,
}

impl GlassApp {
    pub fn new(params: GlassParams, surface: DomSurface, panel: web::Element) -> Rc<Self> {
        let app = Rc::new(Self {
            params: RefCell::new(params),
            surface: RefCell::new(surface),
            panel,
        });
        sync::apply(&app.params.borrow(), &mut *app.surface.borrow_mut());
        app
    }

    /// Reduce one control change and push the result. Map, scales and layout
    /// are all updated before this returns.
    pub fn dispatch(&self, field: Field, value: ControlValue) {
        let next = match self.params.borrow().with_change(field, value) {
            Ok(next) => next,
            Err(e) => {
                log::warn!("[app] {}", e);
                return;
            }
        };
        sync::apply(&next, &mut *self.surface.borrow_mut());
        if field == Field::Preset {
            log::info!("[app] preset {}", next.preset);
            panel::refresh(&self.panel, &next);
        } else {
            panel::refresh_field(&self.panel, &next, field);
        }
        *self.params.borrow_mut() = next;
    }
}
