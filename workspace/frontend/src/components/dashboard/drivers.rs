use common::CustomInputSet;
use yew::prelude::*;

use crate::viewmodel::key_drivers;

#[derive(Properties, PartialEq)]
pub struct DriversGridProps {
    pub input: CustomInputSet,
}

/// The three Key Driver narrative cards for a custom prediction.
#[function_component(DriversGrid)]
pub fn drivers_grid(props: &DriversGridProps) -> Html {
    let cards = key_drivers(&props.input);

    html! {
        <div class="mb-6">
            <h3 class="text-lg font-bold mb-4">{"Key Drivers"}</h3>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {for cards.iter().map(|card| html! {
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <span class="text-3xl">{card.icon}</span>
                            <h4 class="font-bold text-sm">{card.title}</h4>
                            <p class="text-sm text-gray-500">{&card.description}</p>
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}
