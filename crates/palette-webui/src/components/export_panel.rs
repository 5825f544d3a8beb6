use crate::{
    components::toast::ToastContext,
    palette::{ColorSwatch, css_variables, palette_json},
    toast::ToastOptions,
    util::clipboard::copy_to_clipboard,
};
use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default, strum::Display)]
enum ExportFormat {
    #[default]
    #[strum(to_string = "CSS")]
    Css,
    #[strum(to_string = "JSON")]
    Json,
}

impl ExportFormat {
    fn render(self, swatches: &[ColorSwatch]) -> String {
        match self {
            ExportFormat::Css => css_variables(swatches),
            ExportFormat::Json => palette_json(swatches),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ExportPanelProps {
    pub swatches: Vec<ColorSwatch>,
}

#[function_component(ExportPanel)]
pub fn export_panel(ExportPanelProps { swatches }: &ExportPanelProps) -> Html {
    let toasts = use_context::<ToastContext>().expect("ToastContext is set by ToastProvider");
    let format_state = use_state(ExportFormat::default);
    let format = *format_state;
    let exported = format.render(swatches);

    let on_copy = {
        let exported = exported.clone();
        Callback::from(move |_: MouseEvent| {
            let toasts = toasts.clone();
            let exported = exported.clone();
            spawn_local(async move {
                match copy_to_clipboard(&exported).await {
                    Ok(()) => {
                        toasts.show(format!("{format} copied to clipboard"), ToastOptions::default());
                    }
                    Err(err) => {
                        error!("Failed to copy {format} export: {err:?}");
                        toasts.show(format!("Could not copy {format}: {err}"), ToastOptions::default());
                    }
                }
            });
        })
    };

    let tab = |tab_format: ExportFormat| {
        let format_state = format_state.clone();
        html! {
            <button
                class={classes!("export-tab", (tab_format == format).then_some("selected"))}
                onclick={move |_| format_state.set(tab_format)}
            >
                { tab_format.to_string() }
            </button>
        }
    };

    html! {
        <section class="export-panel">
            <h3>{"Export"}</h3>
            <div class="export-tabs">
                { tab(ExportFormat::Css) }
                { tab(ExportFormat::Json) }
                <button class="export-copy" onclick={on_copy} disabled={swatches.is_empty()}>
                    {"Copy"}
                </button>
            </div>
            <pre class="export-output"><code>{ exported }</code></pre>
        </section>
    }
}
