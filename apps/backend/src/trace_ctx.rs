//! Task-local trace context for web requests.
//!
//! Gives any code on the request path access to the current trace id without
//! threading it through every call. The scope is established by the
//! `RequestTrace` middleware; outside a request the id reads as "unknown".

use std::cell::RefCell;

use tokio::task_local;

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

/// Trace id of the current task, or "unknown" outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| {
            cell.borrow()
                .as_ref()
                .cloned()
                .unwrap_or_else(|| "unknown".to_string())
        })
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run `future` with `trace_id` installed as the task-local trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_outside_a_scope() {
        assert_eq!(trace_id(), "unknown");
    }

    #[tokio::test]
    async fn scoped_id_is_visible_and_dropped() {
        let id = "trace-abc".to_string();
        with_trace_id(id.clone(), async {
            assert_eq!(trace_id(), id);
        })
        .await;
        assert_eq!(trace_id(), "unknown");
    }
}
