use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::{Interval, Timeout};
use roll_shared::constants::LANE_TRACK_PX;
use roll_shared::shared_ticker::{Lane, ScrollDirection, TickerConfig, TickerState};
use roll_shared::Point;
use wasm_bindgen::JsCast;
use web_sys::{Animation, Element, MouseEvent, TouchEvent};
use yew::prelude::*;

use super::ticker_handles::TickerHandles;
use crate::dom::{first_touch, mount_style, mouse_point, unmount_style};
use crate::styles;

const TICKER_CSS: &str = r#"
@keyframes roll-ticker-scroll {
    from { transform: translateX(0); }
    to { transform: translateX(-50%); }
}

.roll-ticker-track {
    display: flex;
    width: max-content;
    animation-name: roll-ticker-scroll;
    animation-timing-function: linear;
    animation-iteration-count: infinite;
}

.roll-ticker-tap {
    position: fixed;
    width: 56px;
    height: 56px;
    margin: -28px 0 0 -28px;
    border-radius: 9999px;
    pointer-events: none;
    background: radial-gradient(circle, rgba(255, 255, 255, 0.6), rgba(255, 255, 255, 0));
    transition: opacity 1s ease-out;
}
"#;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PointerKind {
    Mouse,
    Touch,
}

pub enum Msg {
    Press(Point, PointerKind),
    Drag(Point),
    Release,
    HoldStart,
    HoldTick,
    Frame,
    ClearIndicator,
}

#[derive(Properties, PartialEq)]
pub struct NumbersTickerProps {
    #[prop_or_default]
    pub config: TickerConfig,
}

type Handles = TickerHandles<Timeout, Interval, AnimationFrame, EventListener>;

/// Lanes of scrolling numbers whose speed follows the pointer.
///
/// Each lane runs a fixed-duration CSS animation; the smoothed speed
/// multiplier is applied as the animations' playback rate, so speeding up
/// never moves a lane to a different point of its cycle.
pub struct NumbersTicker {
    state: TickerState,
    handles: Handles,
    container_ref: NodeRef,
    style: Option<Element>,
}

impl NumbersTicker {
    fn hold_delay(&self, ctx: &Context<Self>) -> Timeout {
        let link = ctx.link().clone();
        Timeout::new(self.state.config.hold_delay_ms, move || {
            link.send_message(Msg::HoldStart);
        })
    }

    fn grace(&self, ctx: &Context<Self>) -> Timeout {
        let link = ctx.link().clone();
        Timeout::new(self.state.config.release_grace_ms, move || {
            link.send_message(Msg::ClearIndicator);
        })
    }

    /// Keeps exactly one smoothing frame in flight.
    fn ensure_frame(&mut self, ctx: &Context<Self>) {
        if self.handles.has_frame() {
            return;
        }
        let link = ctx.link().clone();
        self.handles
            .set_frame(request_animation_frame(move |_| link.send_message(Msg::Frame)));
    }

    // Tracking continues outside the widget until the gesture ends
    fn gesture_listeners(ctx: &Context<Self>, kind: PointerKind) -> Vec<EventListener> {
        let document = gloo_utils::document();
        let link = ctx.link();
        let mut listeners = Vec::new();

        match kind {
            PointerKind::Mouse => {
                let on_move = link.clone();
                listeners.push(EventListener::new(&document, "mousemove", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        on_move.send_message(Msg::Drag(mouse_point(event)));
                    }
                }));
                let on_up = link.clone();
                listeners.push(EventListener::new(&document, "mouseup", move |_| {
                    on_up.send_message(Msg::Release);
                }));
            }
            PointerKind::Touch => {
                let on_move = link.clone();
                listeners.push(EventListener::new(&document, "touchmove", move |event| {
                    if let Some(point) = event.dyn_ref::<TouchEvent>().and_then(first_touch) {
                        on_move.send_message(Msg::Drag(point));
                    }
                }));
                for name in ["touchend", "touchcancel"] {
                    let on_end = link.clone();
                    listeners.push(EventListener::new(&document, name, move |_| {
                        on_end.send_message(Msg::Release);
                    }));
                }
            }
        }
        listeners
    }

    fn apply_playback_rate(&self) {
        let Some(container) = self.container_ref.cast::<Element>() else {
            return;
        };
        let tracks = match container.query_selector_all(".roll-ticker-track") {
            Ok(tracks) => tracks,
            Err(e) => {
                log::warn!("Failed to look up ticker lanes: {:?}", e);
                return;
            }
        };

        let rate = self.state.playback_rate();
        for index in 0..tracks.length() {
            let Some(track) = tracks.get(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            for animation in track.get_animations().iter() {
                if let Ok(animation) = animation.dyn_into::<Animation>() {
                    animation.set_playback_rate(rate);
                }
            }
        }
    }

    fn view_lane(&self, index: usize, lane: &Lane) -> Html {
        let direction = match lane.direction {
            ScrollDirection::Left => "normal",
            ScrollDirection::Right => "reverse",
        };
        let track_style = format!(
            "animation-duration: {:.3}s; animation-delay: {}s; animation-direction: {};",
            lane.cycle_seconds(LANE_TRACK_PX),
            lane.delay,
            direction
        );

        // Items are rendered twice so the -50% keyframe loops seamlessly
        html! {
            <div key={format!("lane-{}", index)} class={styles::TICKER_LANE}>
                <div class="roll-ticker-track" style={track_style}>
                    { for (0..2).flat_map(|copy| lane.items.iter().map(move |item| html! {
                        <div key={format!("{}-{}", item.id, copy)} class={styles::TICKER_NUMBER} data-lane={index.to_string()}>
                            { item.value.clone() }
                        </div>
                    })) }
                </div>
            </div>
        }
    }

    fn view_indicator(&self) -> Html {
        match self.state.indicator {
            Some(point) => {
                let opacity = if self.state.is_interacting { 1.0 } else { 0.8 };
                let style = format!("left: {}px; top: {}px; opacity: {};", point.x, point.y, opacity);
                html! { <div class="roll-ticker-tap" {style}></div> }
            }
            None => html! {},
        }
    }
}

impl Component for NumbersTicker {
    type Message = Msg;
    type Properties = NumbersTickerProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            state: TickerState::new(ctx.props().config.clone().or_default()),
            handles: Handles::default(),
            container_ref: NodeRef::default(),
            style: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().config != old_props.config {
            self.state.config = ctx.props().config.clone().or_default();
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Press(point, kind) => {
                log::debug!("Ticker press ({:?}) at {:?}", kind, point);
                self.state.press(point);
                let hold_delay = self.hold_delay(ctx);
                self.handles.press(hold_delay, Self::gesture_listeners(ctx, kind));
                self.ensure_frame(ctx);
                true
            }
            Msg::HoldStart => {
                let link = ctx.link().clone();
                self.handles.start_hold(Interval::new(self.state.config.hold_interval_ms, move || {
                    link.send_message(Msg::HoldTick);
                }));
                false
            }
            Msg::HoldTick => {
                self.state.hold_tick();
                self.ensure_frame(ctx);
                false
            }
            Msg::Drag(point) => {
                if !self.state.is_interacting {
                    return false;
                }
                self.handles.cancel_hold();
                self.state.drag(point);
                self.ensure_frame(ctx);
                true
            }
            Msg::Release => {
                if !self.state.release() {
                    self.handles.detach();
                    return false;
                }
                log::debug!("Ticker release, easing back to {}", self.state.target_speed);
                let grace = self.grace(ctx);
                self.handles.release(grace);
                self.ensure_frame(ctx);
                true
            }
            Msg::Frame => {
                self.handles.frame_fired();
                self.state.step();
                self.apply_playback_rate();
                if !self.state.is_settled() {
                    self.ensure_frame(ctx);
                }
                false
            }
            Msg::ClearIndicator => {
                self.handles.grace_elapsed();
                self.state.clear_indicator();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onmousedown = ctx.link().callback(|e: MouseEvent| {
            e.prevent_default();
            Msg::Press(mouse_point(&e), PointerKind::Mouse)
        });
        let onmouseleave = ctx.link().callback(|_: MouseEvent| Msg::Release);
        let ontouchstart = ctx
            .link()
            .batch_callback(|e: TouchEvent| first_touch(&e).map(|point| Msg::Press(point, PointerKind::Touch)));

        html! {
            <div
                ref={self.container_ref.clone()}
                class={styles::TICKER_CONTAINER}
                style="pointer-events: auto;"
                {onmousedown}
                {onmouseleave}
                {ontouchstart}
            >
                { for self.state.config.lanes.iter().enumerate().map(|(index, lane)| self.view_lane(index, lane)) }
                { self.view_indicator() }
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.style = mount_style(TICKER_CSS);
        }
        // Lanes created by this render start at rate 1
        self.apply_playback_rate();
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.handles.clear();
        unmount_style(self.style.take());
    }
}
