use crate::{
    DEBOUNCE_MS, DEFAULT_LIGHTNESS, DEFAULT_SATURATION,
    app::{AppState, Route},
    components::{
        color_swatch::ColorSwatchTile, export_panel::ExportPanel,
        palette_insights::PaletteInsightsPanel,
    },
    palette::{PaletteEvent, PaletteState, fetch_palette},
    util::{color::hue_gradient, debounce::Debouncer},
};
use futures::{FutureExt as _, StreamExt as _, channel::oneshot, stream::LocalBoxStream};
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Saturation and lightness carried in the URL, e.g. `/?s=75&l=60`.
///
/// Each value is read on its own: numbers are clamped to 0..=100 and anything
/// unparsable falls back to the default for that field only.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PaletteQuery {
    #[serde(default, deserialize_with = "percent_param")]
    pub s: Option<u8>,
    #[serde(default, deserialize_with = "percent_param")]
    pub l: Option<u8>,
}

fn percent_param<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u8>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .and_then(|value| u8::try_from(value.clamp(0, 100)).ok()))
}

/// Saturation and lightness, both percentages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Selection {
    saturation: u8,
    lightness: u8,
}

impl Selection {
    fn from_query(query: &PaletteQuery) -> Self {
        Self {
            saturation: query.s.unwrap_or(DEFAULT_SATURATION).min(100),
            lightness: query.l.unwrap_or(DEFAULT_LIGHTNESS).min(100),
        }
    }

    fn as_query(self) -> PaletteQuery {
        PaletteQuery {
            s: Some(self.saturation),
            l: Some(self.lightness),
        }
    }
}

impl Reducible for PaletteState {
    type Action = PaletteEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = Rc::unwrap_or_clone(self);
        state.apply(action);
        state.into()
    }
}

/// Feeds palette events into the view until the stream ends or a newer
/// selection cancels it.
async fn consume_palette_events(
    mut events: LocalBoxStream<'static, PaletteEvent>,
    dispatcher: UseReducerDispatcher<PaletteState>,
    cancel_rx: oneshot::Receiver<()>,
) {
    let mut cancel_rx = cancel_rx.fuse();
    loop {
        let next_event = futures::select! {
            next_event = events.next().fuse() => next_event,
            _ = &mut cancel_rx => {
                debug!("Palette fetch superseded");
                break;
            }
        };
        match next_event {
            Some(event) => dispatcher.dispatch(event),
            None => break,
        }
    }
}

fn slider_callback(
    selection_state: &UseStateHandle<Selection>,
    debouncer: &Rc<RefCell<Debouncer>>,
    navigator: &Navigator,
    update: fn(Selection, u8) -> Selection,
) -> Callback<InputEvent> {
    let selection_state = selection_state.clone();
    let debouncer = debouncer.clone();
    let navigator = navigator.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>()
            && let Ok(value) = input.value().parse::<u8>()
        {
            let selection = update(*selection_state, value.min(100));
            selection_state.set(selection);
            let navigator = navigator.clone();
            debouncer.borrow_mut().schedule(DEBOUNCE_MS, move || {
                let _ = navigator.replace_with_query(&Route::Home, &selection.as_query());
            });
        }
    })
}

#[function_component(PalettePage)]
pub fn palette_page() -> Html {
    let app_state =
        use_context::<AppState>().expect("AppState context is set when starting the App");
    let location = use_location().expect("should be called inside a router");
    let navigator = use_navigator().expect("should be called inside a router");

    // The URL query is the debounced selection, the palette follows it.
    let requested = Selection::from_query(&location.query::<PaletteQuery>().unwrap_or_default());
    // Slider positions, updated on every input event.
    let selection_state = use_state(|| requested);
    let palette_state = use_reducer_eq(PaletteState::default);
    let debouncer = use_mut_ref(Debouncer::default);

    // Effect: Fetch the palette whenever the requested selection changes
    {
        let palette_state = palette_state.clone();
        let selection_state = selection_state.clone();
        use_effect_with(requested, move |requested| {
            // Back/forward navigation moves the sliders too.
            selection_state.set(*requested);
            let Selection {
                saturation,
                lightness,
            } = *requested;
            let (cancel_tx, cancel_rx) = oneshot::channel();
            let events = fetch_palette(
                app_state.lookup.clone(),
                &app_state.cache,
                saturation,
                lightness,
            );
            spawn_local(consume_palette_events(
                events,
                palette_state.dispatcher(),
                cancel_rx,
            ));
            move || {
                let _ = cancel_tx.send(());
            }
        });
    }

    // Effect: Drop a pending debounced update on unmount
    {
        let debouncer = debouncer.clone();
        use_effect_with((), move |()| move || debouncer.borrow_mut().cancel());
    }

    let on_saturation = slider_callback(
        &selection_state,
        &debouncer,
        &navigator,
        |selection, saturation| Selection {
            saturation,
            ..selection
        },
    );
    let on_lightness = slider_callback(
        &selection_state,
        &debouncer,
        &navigator,
        |selection, lightness| Selection {
            lightness,
            ..selection
        },
    );

    let selection = *selection_state;
    let palette = &*palette_state;

    html! {
        <>
            <h2>{"Palette Explorer"}</h2>

            <div class="palette-controls">
                <label>
                    { format!("Saturation: {}%", selection.saturation) }
                    <input
                        type="range"
                        min="0"
                        max="100"
                        value={selection.saturation.to_string()}
                        oninput={on_saturation}
                    />
                </label>
                <label>
                    { format!("Lightness: {}%", selection.lightness) }
                    <input
                        type="range"
                        min="0"
                        max="100"
                        value={selection.lightness.to_string()}
                        oninput={on_lightness}
                    />
                </label>
                <div
                    class="hue-preview"
                    style={format!("background: {};", hue_gradient(selection.saturation, selection.lightness))}
                />
            </div>

            if palette.loading {
                <p class="palette-loading">
                    { format!("Loading colors... ({} found)", palette.colors.len()) }
                </p>
            }
            if let Some(error) = &palette.error {
                <p class="palette-error">{ error }</p>
            }

            <div class="swatch-grid">
                { for palette.colors.iter().map(|swatch| html! {
                    <ColorSwatchTile key={swatch.name.clone()} swatch={swatch.clone()} />
                })}
            </div>

            if !palette.loading && !palette.colors.is_empty() {
                <PaletteInsightsPanel swatches={palette.colors.clone()} />
                <ExportPanel swatches={palette.colors.clone()} />
            }
        </>
    }
}
