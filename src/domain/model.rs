use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Untyped event payload as delivered by the host.
pub type Payload = HashMap<String, serde_json::Value>;

/// What a handler hands back to the host. `None` serialises as JSON `null`.
pub type HandlerResult = Option<serde_json::Value>;

const LOCAL_FUNCTION_ARN: &str = "arn:aws:lambda:local:000000000000:function:lambda-layer-demo";
const LOCAL_TIMEOUT_SECS: i64 = 900;

/// Per-invocation metadata supplied by the host.
///
/// Handlers receive it but are free to ignore it; the binaries use it for log fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationContext {
    pub request_id: String,
    pub function_arn: String,
    /// Epoch milliseconds after which the host aborts the invocation.
    pub deadline_ms: u64,
    pub trace_id: Option<String>,
}

impl InvocationContext {
    /// Context for an invocation that does not come from the Lambda service.
    pub fn local() -> Self {
        let now = Utc::now();
        let deadline = now + Duration::seconds(LOCAL_TIMEOUT_SECS);

        Self {
            request_id: format!("local-{}", now.timestamp_micros()),
            function_arn: LOCAL_FUNCTION_ARN.to_string(),
            deadline_ms: u64::try_from(deadline.timestamp_millis()).unwrap_or_default(),
            trace_id: None,
        }
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.deadline_ms).ok()?;
        Utc.timestamp_millis_opt(millis).single()
    }
}

#[cfg(feature = "lambda")]
impl From<&lambda_runtime::Context> for InvocationContext {
    fn from(ctx: &lambda_runtime::Context) -> Self {
        Self {
            request_id: ctx.request_id.clone(),
            function_arn: ctx.invoked_function_arn.clone(),
            deadline_ms: ctx.deadline,
            trace_id: ctx.xray_trace_id.clone(),
        }
    }
}
