use gloo::timers::callback::Timeout;

/// Runs only the last of a burst of scheduled callbacks.
#[derive(Default)]
pub struct Debouncer {
    pending: Option<Timeout>,
}

impl Debouncer {
    /// Schedules `callback` after `delay_ms`, cancelling whatever was scheduled before.
    pub fn schedule(&mut self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        // Dropping a Timeout clears it.
        self.pending = Some(Timeout::new(delay_ms, callback));
    }

    pub fn cancel(&mut self) {
        if let Some(timeout) = self.pending.take() {
            timeout.cancel();
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use std::{cell::RefCell, rc::Rc};
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    async fn only_the_last_callback_runs() {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut debouncer = Debouncer::default();
        for value in [10, 20, 30] {
            let fired = fired.clone();
            debouncer.schedule(20, move || fired.borrow_mut().push(value));
        }
        assert!(fired.borrow().is_empty());

        TimeoutFuture::new(80).await;

        assert_eq!(vec![30], *fired.borrow());
    }

    #[wasm_bindgen_test]
    async fn cancel_drops_the_pending_callback() {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut debouncer = Debouncer::default();
        {
            let fired = fired.clone();
            debouncer.schedule(20, move || fired.borrow_mut().push(1));
        }
        debouncer.cancel();

        TimeoutFuture::new(80).await;

        assert!(fired.borrow().is_empty());
    }
}
