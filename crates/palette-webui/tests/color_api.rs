#![cfg(not(target_arch = "wasm32"))]

use futures::StreamExt as _;
use palette_webui::{
    color_api::{ColorLookup, HslRequest, HttpColorLookup, LookupError},
    palette::{ColorSwatch, PaletteCache, PaletteEvent, PaletteState, Rgb, fetch_palette},
};
use serde_json::json;
use std::rc::Rc;
use wiremock::{
    Mock, MockServer, Request, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn color_body(name: &str, r: u8, g: u8, b: u8, hue: u16) -> serde_json::Value {
    json!({
        "hex": { "value": "#000000", "clean": "000000" },
        "rgb": { "r": r, "g": g, "b": b, "value": format!("rgb({r}, {g}, {b})") },
        "hsl": { "h": hue, "s": 75, "l": 60, "value": format!("hsl({hue}, 75%, 60%)") },
        "name": { "value": name, "closest_named_hex": "#000000", "exact_match_name": false, "distance": 12 }
    })
}

/// Hue from the `hsl=h,s,l` query parameter.
fn requested_hue(request: &Request) -> u16 {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == "hsl")
        .and_then(|(_, value)| value.split(',').next()?.parse().ok())
        .expect("every request carries hsl")
}

fn lookup_for(server: &MockServer) -> HttpColorLookup {
    HttpColorLookup::new(format!("{}/id", server.uri()))
}

#[tokio::test]
async fn lookup_sends_hsl_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/id"))
        .and(query_param("hsl", "120,75,60"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(color_body("Pastel Green", 119, 221, 119, 120)))
        .expect(1)
        .mount(&server)
        .await;

    let response = lookup_for(&server)
        .lookup(HslRequest {
            hue: 120,
            saturation: 75,
            lightness: 60,
        })
        .await
        .unwrap();

    assert_eq!(
        ColorSwatch::new("Pastel Green", Rgb::new(119, 221, 119), 120.0),
        ColorSwatch::from(response)
    );
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = lookup_for(&server)
        .lookup(HslRequest {
            hue: 0,
            saturation: 88,
            lightness: 55,
        })
        .await
        .unwrap_err();

    assert_eq!(LookupError::Status(500), err);
    assert_eq!("API request failed: 500", err.to_string());
}

#[tokio::test]
async fn malformed_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
        .mount(&server)
        .await;

    let err = lookup_for(&server)
        .lookup(HslRequest {
            hue: 0,
            saturation: 10,
            lightness: 10,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Decode(_)), "{err:?}");
    assert!(err.to_string().contains("API request failed"));
}

#[tokio::test]
async fn unreachable_service_is_an_error() {
    // Nothing listens on port 1.
    let err = HttpColorLookup::new("http://127.0.0.1:1/id")
        .lookup(HslRequest {
            hue: 0,
            saturation: 10,
            lightness: 10,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn palette_over_http_is_fetched_once_and_deduplicated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/id"))
        .respond_with(|request: &Request| {
            let hue = requested_hue(request);
            // One name per 60° band: six distinct colors.
            ResponseTemplate::new(200).set_body_json(color_body(&format!("Band {}", hue / 60), 200, 100, 50, hue))
        })
        .expect(36)
        .mount(&server)
        .await;

    let lookup: Rc<dyn ColorLookup> = Rc::new(lookup_for(&server));
    let cache = PaletteCache::new();

    let mut state = PaletteState::default();
    let mut events = fetch_palette(lookup.clone(), &cache, 75, 60);
    while let Some(event) = events.next().await {
        state.apply(event);
    }
    assert_eq!(6, state.colors.len());
    assert!(!state.loading);
    assert_eq!(None, state.error);

    let repeat: Vec<PaletteEvent> = fetch_palette(lookup, &cache, 75, 60).collect().await;
    assert!(matches!(repeat.as_slice(), [PaletteEvent::Completed(swatches)] if swatches.len() == 6));
    // `expect(36)` is verified when the server drops.
}

#[tokio::test]
async fn single_failing_hue_fails_the_palette() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("hsl", "350,88,55"))
        .respond_with(ResponseTemplate::new(503))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(|request: &Request| {
            let hue = requested_hue(request);
            ResponseTemplate::new(200).set_body_json(color_body(&format!("Color {hue}"), 1, 2, 3, hue))
        })
        .mount(&server)
        .await;

    let lookup: Rc<dyn ColorLookup> = Rc::new(lookup_for(&server));
    let cache = PaletteCache::new();
    let mut state = PaletteState::default();
    let mut events = fetch_palette(lookup, &cache, 88, 55);
    while let Some(event) = events.next().await {
        state.apply(event);
    }

    assert!(state.colors.is_empty());
    assert!(!state.loading);
    assert_eq!(Some("API request failed: 503"), state.error.as_deref());
    assert!(cache.is_empty());
}
