// ABOUTME: Handler for GET /hello, greeting the `name` query parameter.
// ABOUTME: Optionally sends the name through the injected Reverser; its failures become 500s.

use axum::extract::{Query, State};
use greeter_core::{GreetingRequest, GreetingResponse};

use crate::app_state::SharedState;
use crate::error::DelegateCallError;

/// GET /hello - Reply `Hello <name>!\n`, reversing the name when a Reverser is injected.
pub async fn hello(
    State(state): State<SharedState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, DelegateCallError> {
    let req = GreetingRequest::from_query_pairs(pairs);
    let name = req.resolved_name();

    let value = match &state.reverser {
        Some(reverser) => reverser.reverse(name).await.inspect_err(|e| {
            tracing::warn!(error = %e, "reverser call failed");
        })?,
        None => name.to_owned(),
    };

    Ok(GreetingResponse::new(value).body())
}
