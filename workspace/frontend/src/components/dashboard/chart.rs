use common::SeriesPoint;
use plotly::common::Mode;
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::viewmodel::trajectory_series;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct TrajectoryChartProps {
    pub historical: Vec<SeriesPoint>,
    pub predictions: Vec<SeriesPoint>,
}

/// Line chart of the recent history plus the forecast.
#[function_component(TrajectoryChart)]
pub fn trajectory_chart(props: &TrajectoryChartProps) -> Html {
    let container_ref = use_node_ref();
    let series = trajectory_series(&props.historical, &props.predictions);

    use_effect_with(
        (container_ref.clone(), series.clone()),
        move |(container_ref, series)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                let div_id = "trajectory-chart";
                element.set_id(div_id);

                let trace = Scatter::new(series.labels.clone(), series.values.clone())
                    .mode(Mode::LinesMarkers)
                    .name("Projected Cases")
                    .line(plotly::common::Line::new().color("rgb(74, 144, 226)").width(3.0));

                let layout = Layout::new()
                    .title(plotly::common::Title::with_text("Case Trajectory"))
                    .x_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("Week")))
                    .y_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("Weekly Cases")))
                    .height(400);

                // Serialize trace to JSON and parse as JS object
                let trace_json = serde_json::to_string(&trace).unwrap();
                let trace_js = js_sys::JSON::parse(&trace_json).unwrap();

                let data_js = js_sys::Array::new();
                data_js.push(&trace_js);

                let layout_json = serde_json::to_string(&layout).unwrap();
                let layout_js = js_sys::JSON::parse(&layout_json).unwrap();

                newPlot(div_id, data_js.into(), layout_js);
            }
            || ()
        },
    );

    html! {
        <div class="card bg-base-100 shadow mb-6">
            <div class="card-body">
                <h3 class="card-title text-lg">{"Projected Case Trajectory"}</h3>
                {if props.historical.is_empty() && props.predictions.is_empty() {
                    html! {
                        <div class="text-center py-8 text-gray-500">
                            <i class="fas fa-chart-line text-4xl mb-4 opacity-50"></i>
                            <p>{"No trajectory data available."}</p>
                        </div>
                    }
                } else {
                    html! { <div ref={container_ref} style="width:100%; height:400px;"></div> }
                }}
            </div>
        </div>
    }
}
