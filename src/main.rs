mod routes;
mod seed;
mod services;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Capacity enforcement is opt-in: signups are rejected at
    // max_participants only when this is set.
    let enforce_capacity = std::env::var("ENFORCE_CAPACITY")
        .is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

    let state = state::AppState::new(seed::directory(), enforce_capacity);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, enforce_capacity, "activityhub listening");
    axum::serve(listener, app).await.expect("server failed");
}
