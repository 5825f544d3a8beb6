//! Progressive palette fetching.
//!
//! [`fetch_palette`] samples the hue circle in [`HUE_STEP`] increments, asks the
//! naming service about every sample concurrently and reports each newly named
//! color as soon as it arrives. The consumer folds the events into a
//! [`PaletteState`].

use super::{CacheKey, ColorSwatch, PaletteCache};
use crate::{
    HUE_STEP,
    color_api::{ColorApiResponse, ColorLookup, HslRequest, LookupError},
};
use futures::{
    FutureExt as _, StreamExt as _,
    future::{self, LocalBoxFuture},
    stream::{self, FuturesUnordered, LocalBoxStream},
};
use hashbrown::HashSet;
use log::{debug, error, trace};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum PaletteEvent {
    /// Cache miss, lookups are about to be issued.
    Started,
    /// A color with a name not seen before in this fetch.
    Accepted(ColorSwatch),
    /// Final, deduplicated palette. Emitted alone on a cache hit.
    Completed(Rc<[ColorSwatch]>),
    /// A lookup failed; nothing from this fetch is kept.
    Failed(LookupError),
}

type PendingLookup = LocalBoxFuture<'static, Result<ColorApiResponse, LookupError>>;

struct FetchRun {
    key: CacheKey,
    cache: PaletteCache,
    pending: FuturesUnordered<PendingLookup>,
    seen: HashSet<String>,
    accepted: Vec<ColorSwatch>,
}

impl FetchRun {
    fn new(lookup: &Rc<dyn ColorLookup>, cache: PaletteCache, key: CacheKey) -> Self {
        let pending = (0..360)
            .step_by(usize::from(HUE_STEP))
            .map(|hue| {
                let lookup = lookup.clone();
                let request = HslRequest {
                    hue,
                    saturation: key.saturation,
                    lightness: key.lightness,
                };
                async move { lookup.lookup(request).await }.boxed_local()
            })
            .collect();
        Self {
            key,
            cache,
            pending,
            seen: HashSet::new(),
            accepted: Vec::new(),
        }
    }

    /// Returns the next event and whether it ends the fetch.
    async fn next_event(&mut self) -> (PaletteEvent, bool) {
        loop {
            match self.pending.next().await {
                Some(Ok(response)) => {
                    if let Some(swatch) = self.accept(response) {
                        return (PaletteEvent::Accepted(swatch), false);
                    }
                }
                Some(Err(err)) => {
                    error!("Fetching palette {} failed: {err}", self.key);
                    // Dropping the remaining lookups abandons them.
                    self.pending.clear();
                    return (PaletteEvent::Failed(err), true);
                }
                None => {
                    let swatches: Rc<[ColorSwatch]> = std::mem::take(&mut self.accepted).into();
                    debug!(
                        "Palette {} complete with {} colors",
                        self.key,
                        swatches.len()
                    );
                    self.cache.insert(self.key.clone(), swatches.clone());
                    return (PaletteEvent::Completed(swatches), true);
                }
            }
        }
    }

    fn accept(&mut self, response: ColorApiResponse) -> Option<ColorSwatch> {
        if !self.seen.insert(response.name.value.clone()) {
            trace!(
                "Skipping duplicate name {:?} at hue {}",
                response.name.value, response.hsl.h
            );
            return None;
        }
        let swatch = ColorSwatch::from(response);
        self.accepted.push(swatch.clone());
        Some(swatch)
    }
}

/// Fetches the palette for a saturation/lightness pair.
///
/// A cached palette is returned as a single [`PaletteEvent::Completed`] without
/// touching `lookup`. Otherwise the stream yields [`PaletteEvent::Started`],
/// one [`PaletteEvent::Accepted`] per new name in arrival order, and ends with
/// either `Completed` or `Failed`. No lookup is issued before the stream is
/// polled past `Started`.
pub fn fetch_palette(
    lookup: Rc<dyn ColorLookup>,
    cache: &PaletteCache,
    saturation: u8,
    lightness: u8,
) -> LocalBoxStream<'static, PaletteEvent> {
    let key = CacheKey::new(saturation, lightness);
    if let Some(swatches) = cache.get(&key) {
        debug!("Cache hit for palette {key}");
        return stream::once(future::ready(PaletteEvent::Completed(swatches))).boxed_local();
    }
    debug!("Cache miss, fetching palette for S={saturation}%, L={lightness}%");
    let run = FetchRun::new(&lookup, cache.clone(), key);
    stream::once(future::ready(PaletteEvent::Started))
        .chain(stream::unfold(Some(run), |run| async move {
            let mut run = run?;
            let (event, finished) = run.next_event().await;
            Some((event, if finished { None } else { Some(run) }))
        }))
        .boxed_local()
}

/// What the palette view shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaletteState {
    /// Visible swatches in arrival order.
    pub colors: Vec<ColorSwatch>,
    pub loading: bool,
    pub error: Option<String>,
}

impl PaletteState {
    pub fn apply(&mut self, event: PaletteEvent) {
        match event {
            PaletteEvent::Started => {
                self.colors.clear();
                self.error = None;
                self.loading = true;
            }
            PaletteEvent::Accepted(swatch) => self.colors.push(swatch),
            PaletteEvent::Completed(swatches) => {
                self.colors = swatches.to_vec();
                self.loading = false;
            }
            PaletteEvent::Failed(err) => {
                // A late failure discards everything shown so far.
                self.colors.clear();
                self.error = Some(err.to_string());
                self.loading = false;
            }
        }
    }
}
