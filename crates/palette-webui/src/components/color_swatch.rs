use crate::{
    components::toast::ToastContext,
    palette::ColorSwatch,
    toast::ToastOptions,
    util::clipboard::copy_to_clipboard,
};
use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ColorSwatchTileProps {
    pub swatch: ColorSwatch,
}

/// Clickable swatch. A click copies `rgb(r, g, b)` to the clipboard.
#[function_component(ColorSwatchTile)]
pub fn color_swatch_tile(ColorSwatchTileProps { swatch }: &ColorSwatchTileProps) -> Html {
    let toasts = use_context::<ToastContext>().expect("ToastContext is set by ToastProvider");
    let text_color = swatch.text_color();
    let rgb = swatch.rgb.to_string();

    let onclick = {
        let name = swatch.name.clone();
        let rgb = rgb.clone();
        Callback::from(move |_: MouseEvent| {
            let toasts = toasts.clone();
            let name = name.clone();
            let rgb = rgb.clone();
            spawn_local(async move {
                match copy_to_clipboard(&rgb).await {
                    Ok(()) => {
                        debug!("Copied {name} as {rgb}");
                        toasts.show(
                            format!("Copied {name}: {rgb}"),
                            ToastOptions::default().with_colors(rgb.clone(), text_color),
                        );
                    }
                    Err(err) => {
                        error!("Failed to copy {rgb}: {err:?}");
                        toasts.show(format!("Could not copy {rgb}: {err}"), ToastOptions::default());
                    }
                }
            });
        })
    };

    html! {
        <button
            class="color-swatch"
            style={format!("background-color: {rgb}; color: {text_color};")}
            title={format!("Click to copy {rgb}")}
            {onclick}
        >
            <span class="color-swatch-name">{ &swatch.name }</span>
            <span class="color-swatch-value">{ &rgb }</span>
            <span class="color-swatch-hue">{ format!("{}°", swatch.hue) }</span>
        </button>
    }
}
