//! Browser binding: DOM listeners that feed a shared [`DoorController`].
//!
//! [`ListenerSet::attach`] registers `pointerdown`, `pointermove` and a
//! non-passive `wheel` listener on the canvas, plus `pointerup` and
//! `pointercancel` on the window so a gesture released outside the canvas
//! still ends. Dropping the set removes every listener it added and
//! detaches the controller.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Event, EventTarget, HtmlCanvasElement,
    PointerEvent, WheelEvent,
};

use crate::camera::ScreenProjector;
use crate::error::DoorkitError;
use crate::input::{InputEvent, MouseButton};
use crate::scene::Manipulable;
use crate::DoorController;

/// Controller shared between the render loop and DOM callbacks.
pub type SharedController<P, O> = Rc<RefCell<DoorController<P, O>>>;

/// Route browser logs and panics to the devtools console.
///
/// If the host already installed a logger, that logger is kept and told
/// about it.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(level) {
        log::warn!("console logging not installed: {e}");
    }
}

struct Registration {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Live DOM listeners for one controller. Drop to unregister.
pub struct ListenerSet<P, O>
where
    P: ScreenProjector + 'static,
    O: Manipulable + 'static,
{
    controller: SharedController<P, O>,
    /// Last pointer position over the canvas, in canvas pixels.
    pointer: Rc<Cell<Vec2>>,
    registrations: Vec<Registration>,
}

impl<P, O> ListenerSet<P, O>
where
    P: ScreenProjector + 'static,
    O: Manipulable + 'static,
{
    /// Register every listener and attach the controller.
    ///
    /// On failure, listeners registered so far are removed again before
    /// the error is returned.
    pub fn attach(
        canvas: &HtmlCanvasElement,
        controller: SharedController<P, O>,
    ) -> Result<Self, DoorkitError> {
        let window = web_sys::window()
            .ok_or_else(|| DoorkitError::Listener("no global window".into()))?;
        let mut set = Self {
            controller,
            pointer: Rc::new(Cell::new(Vec2::ZERO)),
            registrations: Vec::new(),
        };

        let canvas_target: &EventTarget = canvas.as_ref();
        let window_target: &EventTarget = window.as_ref();

        set.listen(canvas_target, "pointerdown", None, |event| {
            event.dyn_ref::<PointerEvent>().map(|e| InputEvent::PointerDown {
                button: MouseButton::from_dom_index(e.button()),
                x: e.offset_x() as f32,
                y: e.offset_y() as f32,
            })
        })?;
        let pointer = Rc::clone(&set.pointer);
        set.listen(canvas_target, "pointermove", None, move |event| {
            let e = event.dyn_ref::<PointerEvent>()?;
            let (x, y) = (e.offset_x() as f32, e.offset_y() as f32);
            pointer.set(Vec2::new(x, y));
            Some(InputEvent::PointerMove { x, y })
        })?;
        set.listen(canvas_target, "wheel", Some(false), |event| {
            event.dyn_ref::<WheelEvent>().map(|e| InputEvent::Wheel {
                delta_y: e.delta_y() as f32,
                x: e.offset_x() as f32,
                y: e.offset_y() as f32,
            })
        })?;
        set.listen(window_target, "pointerup", None, |_| {
            Some(InputEvent::PointerUp)
        })?;
        set.listen(window_target, "pointercancel", None, |_| {
            Some(InputEvent::PointerCancel)
        })?;

        set.controller.borrow_mut().attach();
        Ok(set)
    }

    /// Last pointer position in normalized device coordinates, for the
    /// per-frame tick.
    #[must_use]
    pub fn pointer_ndc(&self) -> Vec2 {
        self.controller
            .borrow()
            .projector()
            .viewport()
            .to_ndc(self.pointer.get())
    }

    fn listen<F>(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        passive: Option<bool>,
        mut translate: F,
    ) -> Result<(), DoorkitError>
    where
        F: FnMut(&Event) -> Option<InputEvent> + 'static,
    {
        let controller = Rc::clone(&self.controller);
        let callback = Closure::wrap(Box::new(move |event: Event| {
            let Some(input) = translate(&event) else {
                return;
            };
            // A callback re-entering while the host holds the controller
            // drops the event rather than panicking.
            let Ok(mut controller) = controller.try_borrow_mut() else {
                return;
            };
            if controller.handle_event(input).prevent_default {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(Event)>);

        let registered = match passive {
            Some(passive) => {
                let options = AddEventListenerOptions::new();
                options.set_passive(passive);
                target
                    .add_event_listener_with_callback_and_add_event_listener_options(
                        kind,
                        callback.as_ref().unchecked_ref(),
                        &options,
                    )
            }
            None => target.add_event_listener_with_callback(
                kind,
                callback.as_ref().unchecked_ref(),
            ),
        };
        registered
            .map_err(|e| DoorkitError::Listener(format!("{kind}: {e:?}")))?;

        self.registrations.push(Registration {
            target: target.clone(),
            kind,
            callback,
        });
        Ok(())
    }
}

impl<P, O> Drop for ListenerSet<P, O>
where
    P: ScreenProjector + 'static,
    O: Manipulable + 'static,
{
    fn drop(&mut self) {
        for Registration {
            target,
            kind,
            callback,
        } in self.registrations.drain(..)
        {
            let removed = target.remove_event_listener_with_callback(
                kind,
                callback.as_ref().unchecked_ref(),
            );
            if let Err(e) = removed {
                log::warn!("failed to remove {kind} listener: {e:?}");
            }
        }
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            controller.detach();
        }
    }
}
