use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    /// Subtitle under the logo; the custom view swaps in the location name.
    pub subtitle: String,
    /// True while a refresh is running; the button shows "Analyzing...".
    pub analyzing: bool,
    pub on_analyze: Callback<()>,
    pub on_open_input: Callback<()>,
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let on_analyze = {
        let on_analyze = props.on_analyze.clone();
        Callback::from(move |_| {
            log::debug!("User clicked analyze button");
            on_analyze.emit(());
        })
    };
    let on_open_input = {
        let on_open_input = props.on_open_input.clone();
        Callback::from(move |_| {
            log::debug!("User opened the custom input modal");
            on_open_input.emit(());
        })
    };

    html! {
        <div class="min-h-screen bg-base-200">
            <header class="navbar bg-base-100 shadow px-4">
                <div class="flex-1">
                    <div class="flex flex-col">
                        <span class="text-xl font-bold">{"🦠 ViralCast"}</span>
                        <span class="text-sm text-gray-500">{&props.subtitle}</span>
                    </div>
                </div>
                <div class="flex-none gap-2">
                    <button class="btn btn-ghost btn-sm" onclick={on_open_input}>
                        <i class="fas fa-map-marker-alt"></i>
                        {" Custom Location"}
                    </button>
                    <button
                        class="btn btn-primary btn-sm"
                        disabled={props.analyzing}
                        onclick={on_analyze}
                    >
                        {if props.analyzing { "Analyzing..." } else { "Analyze" }}
                    </button>
                </div>
            </header>
            <main class="container mx-auto max-w-5xl py-6 px-4">
                {props.children.clone()}
            </main>
        </div>
    }
}
