use crate::{
    color_api::{ColorLookup, HttpColorLookup},
    components::{not_found::NotFound, palette_page::PalettePage, toast::ToastProvider},
    palette::PaletteCache,
};
use std::{ops::Deref, rc::Rc};
use yew::prelude::*;
use yew_router::prelude::*;

/// Services shared by every page, created once when the App starts.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Rc<dyn ColorLookup>,
    pub cache: PaletteCache,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            lookup: Rc::new(HttpColorLookup::default()),
            cache: PaletteCache::new(),
        }
    }
}

impl PartialEq for AppState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.lookup, &other.lookup) && self.cache == other.cache
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn render(route: Route) -> Html {
        match route {
            Route::Home => html! { <PalettePage /> },
            Route::NotFound => html! { <NotFound /> },
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let app_state = use_state(AppState::default);

    html! {
        <ContextProvider<AppState> context={app_state.deref().clone()}>
            <ToastProvider>
                <div class="container">
                    <BrowserRouter>
                        <Switch<Route> render={Route::render} />
                    </BrowserRouter>
                </div>
            </ToastProvider>
        </ContextProvider<AppState>>
    }
}
