#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use paper_reader_tools::tools::*;
    use paper_reader_tools::*;
    use serde_json::{json, Number};
    use std::sync::Arc;

    struct NullExtractor;

    impl TextExtractor for NullExtractor {
        fn extract_text(&self, _bytes: &[u8]) -> Result<ExtractedText, ToolError> {
            Ok(ExtractedText {
                text: String::new(),
                pages: 0,
            })
        }
    }

    struct ShadowPing;

    #[async_trait]
    impl Tool for ShadowPing {
        fn name(&self) -> &'static str {
            "ping"
        }

        fn description(&self) -> &'static str {
            "Duplicate"
        }

        fn schema(&self) -> serde_json::Value {
            json!({"type": "object"})
        }

        async fn execute(
            &self,
            _ctx: ExecutionContext,
            _input: serde_json::Value,
        ) -> Result<ToolResponse, ToolError> {
            Ok(ToolResponse::text("shadow"))
        }
    }

    fn paper_registry() -> ToolRegistryImpl {
        ToolRegistryImpl::paper_tools(Arc::new(NullExtractor), TextLimits::default()).unwrap()
    }

    #[tokio::test]
    async fn test_ping_tool() {
        let ctx = ExecutionContext::new(PolicyStore::new());
        let result = PingTool.execute(ctx, json!({})).await.unwrap();
        assert_eq!(result, ToolResponse::text("pong"));
    }

    #[tokio::test]
    async fn test_ping_ignores_arguments() {
        let ctx = ExecutionContext::new(PolicyStore::new());
        let result = PingTool
            .execute(ctx, json!({"anything": [1, 2, 3]}))
            .await
            .unwrap();
        assert_eq!(result.content.len(), 1);
        assert_eq!(result.first_text(), Some("pong"));
    }

    #[test]
    fn test_registry_order_is_fixed() {
        let registry = paper_registry();
        assert_eq!(
            registry.list(),
            vec![
                "ping",
                "read_pdf",
                "extract_abstract",
                "compare_papers",
                "update_analysis_policy"
            ]
        );
        assert_eq!(registry.count(), 5);
    }

    #[test]
    fn test_registry_listing_is_stable() {
        let registry = paper_registry();
        assert_eq!(registry.descriptors(), registry.descriptors());
    }

    #[test]
    fn test_registry_get_exact_match_only() {
        let registry = paper_registry();
        assert!(registry.get("read_pdf").is_some());
        assert!(registry.get("read").is_none());
        assert!(registry.get("READ_PDF").is_none());
        assert!(registry.get("read_pdf ").is_none());
    }

    #[test]
    fn test_registry_rejects_duplicate_names() {
        let mut registry = ToolRegistryImpl::new();
        registry.register(Arc::new(PingTool)).unwrap();
        let result = registry.register(Arc::new(ShadowPing));
        assert!(matches!(result, Err(ToolError::ValidationError(_))));
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_registry_chainable() {
        let mut registry = ToolRegistryImpl::new();
        registry
            .register(Arc::new(PingTool))
            .unwrap()
            .register(Arc::new(UpdatePolicyTool))
            .unwrap();
        assert_eq!(registry.count(), 2);
    }

    #[test]
    fn test_descriptor_schemas() {
        let descriptors = paper_registry().descriptors();

        let read = &descriptors[1];
        assert_eq!(read.description, "Read full text of a PDF file");
        assert_eq!(read.input_schema["required"], json!(["path"]));

        let compare = &descriptors[3];
        assert_eq!(compare.input_schema["properties"]["paths"]["minItems"], json!(2));

        let update = &descriptors[4];
        assert_eq!(update.input_schema["required"], json!(["dry_run"]));
    }

    #[test]
    fn test_descriptor_serializes_input_schema_key() {
        let descriptors = paper_registry().descriptors();
        let value = serde_json::to_value(&descriptors[0]).unwrap();
        assert_eq!(value["name"], "ping");
        assert_eq!(value["inputSchema"], json!({"type": "object", "properties": {}}));
    }

    #[test]
    fn test_response_serialization() {
        let value = serde_json::to_value(ToolResponse::text("pong")).unwrap();
        assert_eq!(value, json!({"content": [{"type": "text", "text": "pong"}]}));
    }

    #[test]
    fn test_request_arguments_default() {
        let request: ToolRequest = serde_json::from_value(json!({"name": "ping"})).unwrap();
        assert_eq!(request.name, "ping");
        assert!(request.arguments.is_null());
    }

    #[tokio::test]
    async fn test_policy_dry_run_reports_without_applying() {
        let store = PolicyStore::new();
        let ctx = ExecutionContext::new(store.clone());
        let result = UpdatePolicyTool
            .execute(ctx, json!({"dry_run": true, "max_tokens": 500}))
            .await
            .unwrap();

        let text = result.first_text().unwrap();
        assert!(text.starts_with("Dry run"));
        assert!(text.contains("max_tokens=500"));
        assert!(text.contains("enable_chunking=unset"));
        assert!(store.current().is_none());
    }

    #[tokio::test]
    async fn test_policy_commit_overwrites() {
        let store = PolicyStore::new();
        store.replace(AnalysisPolicy::new(Some(Number::from(100)), Some(false)));

        let ctx = ExecutionContext::new(store.clone());
        let result = UpdatePolicyTool
            .execute(ctx, json!({"dry_run": false, "enable_chunking": true}))
            .await
            .unwrap();

        assert_eq!(
            result.first_text(),
            Some("Analysis policy updated: max_tokens=unset, enable_chunking=true.")
        );
        assert_eq!(store.current(), Some(AnalysisPolicy::new(None, Some(true))));
    }

    #[tokio::test]
    async fn test_policy_requires_dry_run() {
        let ctx = ExecutionContext::new(PolicyStore::new());
        let result = UpdatePolicyTool.execute(ctx, json!({"max_tokens": 1})).await;
        assert!(matches!(result, Err(ToolError::ValidationError(_))));
    }

    #[test]
    fn test_resolve_relative_path() {
        let resolved = DocumentLoader::resolve("paper.pdf").unwrap();
        assert!(resolved.is_absolute());
        assert_eq!(resolved, std::env::current_dir().unwrap().join("paper.pdf"));
    }

    #[test]
    fn test_resolve_empty_path() {
        assert!(matches!(
            DocumentLoader::resolve(""),
            Err(ToolError::ValidationError(_))
        ));
    }
}
