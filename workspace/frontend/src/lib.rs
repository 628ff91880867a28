use yew::prelude::*;
use yew_router::prelude::*;

pub mod api_client;
pub mod common;
mod components;
pub mod hooks;
pub mod orchestrator;
pub mod session;
pub mod settings;
pub mod validator;
pub mod viewmodel;

use crate::common::toast::ToastProvider;
use components::dashboard::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <Dashboard /> }
        }
        Route::About => {
            log::trace!("Rendering About page");
            html! { <AboutPage /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <h1 class="text-center py-12">{"404 Not Found"}</h1> }
        }
    }
}

#[function_component(AboutPage)]
fn about_page() -> Html {
    let health = use_state(|| None::<Result<api_client::health::HealthStatus, String>>);

    {
        let health = health.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                health.set(Some(api_client::health::fetch_health().await));
            });
            || ()
        });
    }

    let status_line = match &*health {
        None => html! { <span class="loading loading-spinner loading-sm"></span> },
        Some(Ok(status)) if status.is_ready() => {
            html! { <span class="text-success">{"Prediction service online"}</span> }
        }
        Some(Ok(_)) => {
            html! { <span class="text-warning">{"Prediction service starting up"}</span> }
        }
        Some(Err(e)) => html! { <span class="text-error">{format!("Prediction service unreachable: {e}")}</span> },
    };

    html! {
        <div class="container mx-auto max-w-2xl py-12 px-4">
            <h1 class="text-2xl font-bold mb-4">{"ViralCast"}</h1>
            <p class="mb-4">
                {"ViralCast visualizes weekly airborne disease case trajectories and a \
                  short-term forecast produced by a remote LSTM prediction service. \
                  Enter your own location and epidemiological parameters to get a \
                  custom forecast."}
            </p>
            <p>{"Service status: "}{status_line}</p>
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== ViralCast Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Location lookup base URL: {}", settings.lookup_base_url);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
