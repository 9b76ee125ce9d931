//! LSP server implementation.

use std::sync::Arc;

use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::analysis::builder::pretty_dump;
use crate::analysis::DocumentRegistry;
use crate::config::ServerConfig;
use crate::handlers;

/// Nadesiko language server state.
pub struct NakoLanguageServer {
    /// LSP client for sending notifications
    client: Client,
    /// Open documents and their state
    documents: Arc<RwLock<DocumentRegistry>>,
    /// Settings from the environment and the client
    config: Arc<RwLock<ServerConfig>>,
}

impl NakoLanguageServer {
    /// Create a new language server instance.
    pub fn new(client: Client) -> Self {
        Self::with_registry(client, DocumentRegistry::default())
    }

    /// Create a server that owns the given registry.
    pub fn with_registry(client: Client, registry: DocumentRegistry) -> Self {
        Self {
            client,
            documents: Arc::new(RwLock::new(registry)),
            config: Arc::new(RwLock::new(ServerConfig::from_env())),
        }
    }

    /// Number of open documents.
    pub async fn open_documents(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn config(&self) -> ServerConfig {
        self.config.read().await.clone()
    }

    async fn apply_settings(&self, settings: &serde_json::Value) {
        let mut config = self.config.write().await;
        if let Err(e) = config.apply_settings(settings) {
            tracing::warn!("ignoring client settings: {}", e);
        }
    }

    async fn log<S: ToString>(&self, message: S) {
        self.client
            .log_message(MessageType::INFO, message.to_string())
            .await;
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for NakoLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        tracing::info!("Initializing Nako Language Server");

        if let Some(options) = params.initialization_options.as_ref() {
            self.apply_settings(options).await;
        }

        let legend = self.documents.read().await.legend().to_lsp();

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                // Every change re-tokenizes the whole document
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),

                semantic_tokens_provider: Some(
                    SemanticTokensServerCapabilities::SemanticTokensOptions(
                        SemanticTokensOptions {
                            legend,
                            full: Some(SemanticTokensFullOptions::Bool(true)),
                            range: Some(false),
                            ..Default::default()
                        },
                    ),
                ),

                document_highlight_provider: Some(OneOf::Left(true)),

                hover_provider: Some(HoverProviderCapability::Simple(true)),

                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "nako-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("Nako Language Server initialized");
        self.log(format!(
            "Nako Language Server {} ready",
            env!("CARGO_PKG_VERSION")
        ))
        .await;
    }

    async fn shutdown(&self) -> Result<()> {
        tracing::info!("Shutting down Nako Language Server");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        tracing::debug!("Document opened: {}", params.text_document.uri);
        self.documents.write().await.open(
            params.text_document.uri,
            &params.text_document.text,
            Some(params.text_document.version),
        );
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        tracing::debug!("Document changed: {}", params.text_document.uri);

        // Full sync: the last change carries the whole text
        if let Some(change) = params.content_changes.into_iter().last() {
            self.documents.write().await.update(
                params.text_document.uri,
                &change.text,
                Some(params.text_document.version),
            );
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        tracing::debug!("Document closed: {}", params.text_document.uri);
        self.documents
            .write()
            .await
            .close(&params.text_document.uri);
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        self.apply_settings(&params.settings).await;
    }

    async fn semantic_tokens_full(
        &self,
        params: SemanticTokensParams,
    ) -> Result<Option<SemanticTokensResult>> {
        let uri = &params.text_document.uri;
        tracing::debug!("Semantic tokens request: {}", uri);

        let (tokens, dump) = {
            let mut documents = self.documents.write().await;
            let tokens = handlers::semantic_tokens::get_semantic_tokens(&mut documents, uri);
            let dump = self
                .config
                .read()
                .await
                .trace_semantic_tokens
                .then(|| pretty_dump(&tokens.data, documents.legend()));
            (tokens, dump)
        };

        if let Some(dump) = dump {
            self.log(format!("[semantic] {}\n{}", uri, dump)).await;
        }

        Ok(Some(SemanticTokensResult::Tokens(tokens)))
    }

    async fn semantic_tokens_full_delta(
        &self,
        params: SemanticTokensDeltaParams,
    ) -> Result<Option<SemanticTokensFullDeltaResult>> {
        tracing::debug!(
            "Semantic tokens delta request (unsupported): {}",
            params.text_document.uri
        );
        Ok(Some(handlers::semantic_tokens::empty_delta()))
    }

    async fn semantic_tokens_range(
        &self,
        params: SemanticTokensRangeParams,
    ) -> Result<Option<SemanticTokensRangeResult>> {
        tracing::debug!(
            "Semantic tokens range request (unsupported): {}",
            params.text_document.uri
        );
        Ok(Some(handlers::semantic_tokens::empty_range()))
    }

    async fn document_highlight(
        &self,
        params: DocumentHighlightParams,
    ) -> Result<Option<Vec<DocumentHighlight>>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let documents = self.documents.read().await;
        if let Some(doc) = documents.get(uri) {
            return Ok(handlers::highlight::get_document_highlights(doc, position));
        }

        Ok(None)
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let documents = self.documents.read().await;
        if let Some(doc) = documents.get(uri) {
            return Ok(handlers::hover::get_hover(doc, position));
        }

        Ok(None)
    }
}
