use gloo_timers::callback::Timeout;
use roll_shared::constants::ROLL_REDIRECT_MS;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::NumbersTicker;
use crate::config::load_ticker_config;
use crate::{styles, Route};

#[function_component(Roll)]
pub fn roll() -> Html {
    let navigator = use_navigator();
    let config = use_memo((), |_| load_ticker_config());

    // Move on to the results once the roll has played out
    {
        use_effect_with((), move |_| {
            let timeout = navigator.map(|navigator| {
                Timeout::new(ROLL_REDIRECT_MS, move || {
                    log::info!("Roll finished, showing results");
                    navigator.push(&Route::Results);
                })
            });

            move || {
                drop(timeout);
            }
        });
    }

    html! {
        <div class={styles::ROLL_SCREEN}>
            <div class={styles::ROLL_CONTENT}>
                <NumbersTicker config={(*config).clone()} />
                <span class={styles::ROLL_CAPTION}>
                    {"move your finger"}<br />{"across the screen"}
                </span>
            </div>
        </div>
    }
}
