use gloo_events::{EventListener, EventListenerOptions};
use roll_shared::shared_spin_wheel::{WheelConfig, WheelSection, WheelState};
use roll_shared::{pointer_angle, EmulatedMouseGuard, Point, PointerSource};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::dom::{element_bounds, mount_style, mouse_point, single_touch, unmount_style};

const WHEEL_CSS: &str = r#"
.spin-wheel-container {
    position: relative;
    width: 320px;
    height: 320px;
    margin: 0 auto;
    touch-action: none;
    user-select: none;
}

.spin-wheel {
    position: absolute;
    inset: 0;
    border-radius: 9999px;
    overflow: hidden;
    cursor: grab;
    transform: rotate(var(--rotation));
}

.spin-wheel.no-transition {
    cursor: grabbing;
    transition: none;
}

.spin-wheel.with-transition {
    transition: transform 0.5s cubic-bezier(0.25, 0.1, 0.25, 1);
}

.spin-wheel-section {
    position: absolute;
    inset: 0;
    transform: rotate(var(--section-rotation));
}

.section-content {
    position: absolute;
    top: 12px;
    left: 50%;
    transform: translateX(-50%);
    font-weight: 700;
    opacity: 0.6;
    transition: opacity 0.2s, transform 0.2s;
}

.section-content.active-content {
    opacity: 1;
    transform: translateX(-50%) scale(1.25);
}

.spin-wheel-pointer {
    position: absolute;
    top: -6px;
    left: 50%;
    width: 0;
    height: 0;
    margin-left: -10px;
    border-left: 10px solid transparent;
    border-right: 10px solid transparent;
    border-top: 18px solid #facc15;
}
"#;

pub enum Msg {
    /// Pointer down, with its source and event timestamp in ms.
    Start(Point, PointerSource, f64),
    Move(Point),
    End(PointerSource, f64),
}

#[derive(Properties, PartialEq)]
pub struct SpinWheelProps {
    #[prop_or_default]
    pub sections: Vec<WheelSection>,
    #[prop_or_default]
    pub on_section_selected: Option<Callback<u32>>,
    #[prop_or(0.0)]
    pub initial_rotation: f64,
}

/// Drag-rotatable wheel that reports the section under the pointer marker
/// when a drag ends.
pub struct SpinWheel {
    state: WheelState,
    wheel_ref: NodeRef,
    listeners: Vec<EventListener>,
    touch_start: Option<EventListener>,
    mouse_guard: EmulatedMouseGuard,
    style: Option<Element>,
}

impl SpinWheel {
    fn angle_at(&self, point: Point) -> f64 {
        pointer_angle(element_bounds(&self.wheel_ref), point)
    }

    fn attach_listeners(&mut self, ctx: &Context<Self>) {
        self.listeners.clear();
        let window = gloo_utils::window();
        let link = ctx.link();

        let on_mouse_move = link.clone();
        self.listeners.push(EventListener::new(&window, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                on_mouse_move.send_message(Msg::Move(mouse_point(event)));
            }
        }));

        let on_touch_move = link.clone();
        self.listeners.push(EventListener::new_with_options(
            &window,
            "touchmove",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(touch_event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                // Skipped until a single finger remains
                if let Some(point) = single_touch(touch_event) {
                    on_touch_move.send_message(Msg::Move(point));
                    event.prevent_default();
                }
            },
        ));

        let on_mouse_up = link.clone();
        self.listeners.push(EventListener::new(&window, "mouseup", move |event| {
            on_mouse_up.send_message(Msg::End(PointerSource::Mouse, event.time_stamp()));
        }));

        let on_touch_end = link.clone();
        self.listeners.push(EventListener::new(&window, "touchend", move |event| {
            on_touch_end.send_message(Msg::End(PointerSource::Touch, event.time_stamp()));
        }));
    }

    // Non-passive so the browser does not follow the tap with emulated mouse events
    fn attach_touch_start(&mut self, ctx: &Context<Self>) {
        let Some(wheel) = self.wheel_ref.cast::<Element>() else {
            log::warn!("Spin wheel rendered without its element");
            return;
        };
        let link = ctx.link().clone();
        self.touch_start = Some(EventListener::new_with_options(
            &wheel,
            "touchstart",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(touch_event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                if let Some(point) = single_touch(touch_event) {
                    event.prevent_default();
                    link.send_message(Msg::Start(point, PointerSource::Touch, event.time_stamp()));
                }
            },
        ));
    }

    fn view_section(&self, index: usize, section: &WheelSection, section_angle: f64) -> Html {
        let is_active = self.state.active_section == Some(section.id);
        let style = format!("--section-rotation: {}deg;", index as f64 * section_angle);

        html! {
            <div
                key={section.id}
                class={classes!("spin-wheel-section", is_active.then_some("active-section"))}
                {style}
            >
                <div class={classes!("section-content", is_active.then_some("active-content"))}>
                    { section.label.clone() }
                </div>
            </div>
        }
    }
}

impl Component for SpinWheel {
    type Message = Msg;
    type Properties = SpinWheelProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let config = WheelConfig {
            sections: props.sections.clone(),
            initial_rotation: props.initial_rotation,
        };
        if let Err(e) = config.validate() {
            log::warn!("Spin wheel configured with {}", e);
        }

        Self {
            state: WheelState::new(config),
            wheel_ref: NodeRef::default(),
            listeners: Vec::new(),
            touch_start: None,
            mouse_guard: EmulatedMouseGuard::default(),
            style: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().sections != old_props.sections {
            self.state.set_sections(ctx.props().sections.clone());
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Start(point, source, at_ms) => {
                if !self.mouse_guard.accepts(source, at_ms) {
                    log::debug!("Dropping emulated mouse down");
                    return false;
                }
                if source == PointerSource::Touch {
                    self.mouse_guard.touched(at_ms);
                }
                let angle = self.angle_at(point);
                self.state.begin_drag(angle, point);
                self.attach_listeners(ctx);
                log::debug!("Wheel drag started at {:.1}deg", angle);
                true
            }
            Msg::Move(point) => {
                if !self.state.is_dragging {
                    return false;
                }
                let angle = self.angle_at(point);
                self.state.drag_to(angle, point);
                true
            }
            Msg::End(source, at_ms) => {
                if !self.mouse_guard.accepts(source, at_ms) {
                    return false;
                }
                if source == PointerSource::Touch {
                    self.mouse_guard.touched(at_ms);
                }
                self.listeners.clear();
                if !self.state.is_dragging {
                    return false;
                }
                if let Some(id) = self.state.end_drag() {
                    log::debug!("Wheel settled on section {}", id);
                    if let Some(callback) = &ctx.props().on_section_selected {
                        callback.emit(id);
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onmousedown = ctx
            .link()
            .callback(|e: MouseEvent| Msg::Start(mouse_point(&e), PointerSource::Mouse, e.time_stamp()));

        let container_style = format!("--rotation: {}deg;", self.state.rotation);
        let transition = if self.state.is_dragging { "no-transition" } else { "with-transition" };
        let section_angle = self.state.section_angle().unwrap_or_default();

        html! {
            <div class="spin-wheel-container" style={container_style}>
                <div
                    ref={self.wheel_ref.clone()}
                    class={classes!("spin-wheel", transition)}
                    {onmousedown}
                >
                    { for self.state.sections.iter().enumerate().map(|(index, section)| {
                        self.view_section(index, section, section_angle)
                    }) }
                </div>
                <div class="spin-wheel-pointer"></div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.style = mount_style(WHEEL_CSS);
            self.attach_touch_start(ctx);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.listeners.clear();
        self.touch_start = None;
        unmount_style(self.style.take());
    }
}
