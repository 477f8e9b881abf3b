use crate::policy::PolicyStore;

/// Per-invocation state handed to a tool by the dispatcher.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub request_id: String,
    pub policy: PolicyStore,
}

impl ExecutionContext {
    pub fn new(policy: PolicyStore) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            policy,
        }
    }
}
