//! The indicator binding must exist before any page spawns a request.
//!
//! `use_effect` runs after the first render, by which time the dashboard's
//! `use_resource` tasks are already spawned, so their first `htmx:indicator`
//! would reach no listener. Installing in `use_hook` runs during the render.

use std::fs;
use std::path::Path;

fn app_body() -> String {
    let source =
        fs::read_to_string(Path::new(env!("CARGO_MANIFEST_DIR")).join("src/lib.rs")).unwrap();
    let start = source.find("pub fn App()").expect("App component");
    let body = &source[start..];
    let end = body.find("rsx!").expect("App renders");
    body[..end].to_string()
}

#[test]
fn test_indicator_installed_during_first_render() {
    let body = app_body();
    let install = body
        .find("indicator::install(")
        .expect("App installs the indicator");
    let hook = body[..install]
        .rfind("use_hook(")
        .expect("install runs inside use_hook");
    assert!(
        !body[hook..install].contains(';'),
        "install is not the use_hook initializer"
    );
    assert!(!body.contains("use_effect"));
}

#[test]
fn test_tracker_notifies_the_indicator_event() {
    let body = app_body();
    assert!(body.contains("RequestTracker::new(indicator::dispatch_visibility)"));
}
