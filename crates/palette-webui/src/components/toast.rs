//! Toast notifications for short confirmations such as "Copied rgb(…)".
//!
//! Usage:
//! ```ignore
//! let toasts = use_context::<ToastContext>().unwrap();
//! toasts.show("Copied", ToastOptions::default());
//! ```

use crate::toast::{Toast, ToastId, ToastOptions, Toasts};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Handle to the application's toast service. Created once by [`ToastProvider`].
#[derive(Clone)]
pub struct ToastContext {
    toasts: Rc<RefCell<Toasts>>,
    refresh: UseForceUpdateHandle,
}

impl PartialEq for ToastContext {
    fn eq(&self, other: &Self) -> bool {
        // Consumers only call methods, they never render the list.
        Rc::ptr_eq(&self.toasts, &other.toasts)
    }
}

impl ToastContext {
    /// Shows a toast and schedules its removal after `options.duration_ms`.
    pub fn show(&self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        let duration_ms = options.duration_ms;
        let id = self.toasts.borrow_mut().show(message, options);
        self.refresh.force_update();

        let refresh = self.refresh.clone();
        schedule_removal(&self.toasts, id, duration_ms, move || refresh.force_update());
        id
    }

    pub fn dismiss(&self, id: ToastId) {
        let removed = self.toasts.borrow_mut().remove(id);
        if removed {
            self.refresh.force_update();
        }
    }

    pub fn clear_all(&self) {
        self.toasts.borrow_mut().clear_all();
        self.refresh.force_update();
    }
}

/// Removes `id` once `duration_ms` elapses and calls `on_removed` if it was
/// still visible.
fn schedule_removal(
    toasts: &Rc<RefCell<Toasts>>,
    id: ToastId,
    duration_ms: u32,
    on_removed: impl FnOnce() + 'static,
) {
    let toasts = toasts.clone();
    // Not tracked: removing a toast that was already dismissed is a no-op.
    let _ = Timeout::new(duration_ms, move || {
        if toasts.borrow_mut().remove(id) {
            on_removed();
        }
    })
    .forget();
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Wraps the application and renders active toasts on top of it.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_mut_ref(Toasts::new);
    let refresh = use_force_update();
    let context = ToastContext { toasts, refresh };

    let active = context.toasts.borrow().active().to_vec();
    let on_dismiss = {
        let context = context.clone();
        Callback::from(move |id: ToastId| context.dismiss(id))
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            { props.children.clone() }
            <ToastStack toasts={active} on_dismiss={on_dismiss} />
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastStackProps {
    toasts: Vec<Toast>,
    on_dismiss: Callback<ToastId>,
}

#[function_component(ToastStack)]
fn toast_stack(props: &ToastStackProps) -> Html {
    if props.toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="toast-container">
            { for props.toasts.iter().map(|toast| {
                let id = toast.id;
                let on_dismiss = props.on_dismiss.clone();
                let onclick = Callback::from(move |_| on_dismiss.emit(id));
                let style = format!(
                    "background-color: {}; color: {};",
                    toast.options.background_color, toast.options.text_color
                );

                html! {
                    <div class="toast" key={id.to_string()} id={id.to_string()} {style}>
                        <span class="toast-message">{ &toast.message }</span>
                        <button
                            class="toast-dismiss"
                            {onclick}
                            aria-label="Dismiss notification"
                        >
                            {"×"}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use std::cell::Cell;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let bump = {
            let count = count.clone();
            move || count.set(count.get() + 1)
        };
        (count, bump)
    }

    #[wasm_bindgen_test]
    async fn toast_disappears_after_its_duration() {
        let toasts = Rc::new(RefCell::new(Toasts::new()));
        let short = toasts
            .borrow_mut()
            .show("Copied", ToastOptions::default().with_duration(20));
        let long = toasts
            .borrow_mut()
            .show("Still here", ToastOptions::default().with_duration(5000));
        let (short_removed, on_short) = counter();
        let (long_removed, on_long) = counter();
        schedule_removal(&toasts, short, 20, on_short);
        schedule_removal(&toasts, long, 5000, on_long);
        assert_eq!(2, toasts.borrow().active().len());

        TimeoutFuture::new(80).await;

        assert!(toasts.borrow().get(short).is_none());
        assert!(toasts.borrow().get(long).is_some());
        assert_eq!(1, short_removed.get());
        assert_eq!(0, long_removed.get());
    }

    #[wasm_bindgen_test]
    async fn expiry_of_dismissed_toast_is_silent() {
        let toasts = Rc::new(RefCell::new(Toasts::new()));
        let id = toasts
            .borrow_mut()
            .show("Copied", ToastOptions::default().with_duration(20));
        let (removed, on_removed) = counter();
        schedule_removal(&toasts, id, 20, on_removed);
        assert!(toasts.borrow_mut().remove(id));

        TimeoutFuture::new(80).await;

        assert!(toasts.borrow().active().is_empty());
        assert_eq!(0, removed.get());
    }
}
