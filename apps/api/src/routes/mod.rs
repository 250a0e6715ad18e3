pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advice::{agent, handlers};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health::health_handler))
        // Advice API
        .route("/api/v1/advice/interests", get(handlers::handle_interests))
        .route("/api/v1/advice", post(handlers::handle_advice))
        .route("/api/v1/advice/upload", post(handlers::handle_advice_upload))
        .route("/api/v1/advice/stream", post(handlers::handle_advice_stream));

    // The agent endpoint only exists when this process can run the model itself.
    let router = match state.llm.clone() {
        Some(llm) => {
            let agent_routes: Router<AppState> = Router::new()
                .route("/api/v1/agent/advice", post(agent::handle_agent_advice))
                .with_state(llm);
            router.merge(agent_routes)
        }
        None => router,
    };

    router.with_state(state)
}
