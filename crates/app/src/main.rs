use dioxus::prelude::*;
use shared_types::{FeatureFlags, Session};

mod auth;
mod routes;
use auth::{use_session, SessionState};
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::config::load_config();

        if config.features.telemetry {
            server::telemetry::init_telemetry();
        }

        // Seed demo accounts before the first request arrives.
        let _ = server::session::store();

        let mut router = dioxus::server::router(App);

        if config.features.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(axum::middleware::from_fn(server::auth::session_middleware))
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch feature flags once and provide via context (defaults all-off on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);
    use_context_provider(SessionState::new);

    let mut session = use_session();

    // The session loads after mount; until it resolves the state stays in
    // its loading phase and the dispatcher makes no decisions.
    let loaded = use_resource(move || async move { server::api::get_session().await });

    use_effect(move || match &*loaded.read() {
        Some(Ok(snapshot)) => session.apply(snapshot.clone()),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "session lookup failed, continuing signed out");
            session.apply(Session::default());
        }
        None => {}
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "app-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
