use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::SpinWheel;
use crate::config::load_wheel_sections;
use crate::{styles, Route};

#[function_component(Results)]
pub fn results() -> Html {
    let sections = use_memo((), |_| load_wheel_sections());
    let selected = use_state(|| None::<u32>);

    let on_section_selected = {
        let selected = selected.clone();
        Callback::from(move |id: u32| {
            log::info!("Section {} selected", id);
            selected.set(Some(id));
        })
    };

    let selected_label = (*selected).and_then(|id| {
        sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| section.label.clone())
    });

    html! {
        <div class={styles::CONTAINER}>
            <div class="mx-auto flex max-w-md flex-col items-center gap-8 py-16">
                <h2 class={styles::TEXT_H2}>{"Spin to pick your result"}</h2>
                <div class={styles::CARD}>
                    <SpinWheel
                        sections={(*sections).clone()}
                        on_section_selected={Some(on_section_selected)}
                    />
                </div>
                {
                    match selected_label {
                        Some(label) => html! {
                            <p class={styles::TEXT_BODY}>{format!("Selected: {}", label)}</p>
                        },
                        None => html! {
                            <p class={styles::TEXT_SMALL}>{"Drag the wheel and let go"}</p>
                        },
                    }
                }
                <Link<Route> to={Route::Roll} classes={styles::LINK}>{"Roll again"}</Link<Route>>
            </div>
        </div>
    }
}
