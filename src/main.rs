mod config;
mod engine;
mod error;
mod fx;
mod page;
mod pages;
mod primitives;
mod schedule;
mod surface;
mod transform;

use dioxus::prelude::*;
use pages::{Dashboard, TripView};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/trips")]
    TripView {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(EnvFilter::new("info,expense_fx=debug"));
    tracing_subscriber::registry().with(fmt_layer).init();

    dioxus::launch(App);
}
