//! The search agent.

use crate::{
    AgentConfig, ResumeSource, SEARCH_NOTICE, StreamedResponse, events, prompt, template,
};
use anyhow::Result;
use futures_util::{StreamExt, pin_mut};
use scout::{Agent, Documents, EventSink, Model, Query, ResponseHandler, Search, SearchResults};
use serde_json::json;

/// Searches, composes a prompt and streams the model's answer.
///
/// The document service is only consulted when the config reads the
/// resume from a document; pass `None::<D>` otherwise.
pub struct SearchAgent<M, S, D> {
    config: AgentConfig,
    model: M,
    search: S,
    documents: D,
}

impl<M: Model, S: Search, D: Documents> SearchAgent<M, S, D> {
    /// Create a new agent.
    pub fn new(config: AgentConfig, model: M, search: S, documents: D) -> Self {
        Self {
            config,
            model,
            search,
            documents,
        }
    }

    /// The agent configuration.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Live search results, or the empty set while search is off.
    async fn search(&self, query: &str) -> Result<SearchResults> {
        if !self.config.live_search {
            tracing::debug!("live search disabled, using empty results");
            return Ok(SearchResults::empty());
        }
        self.search.search(query).await
    }

    /// Build the prompt for `query` from the template and resume source.
    async fn compose(&self, template: &str, query: &str) -> String {
        match &self.config.resume {
            ResumeSource::Inline => prompt::inline(template, query),
            ResumeSource::Document { id } => {
                let resume = match self.resume(id).await {
                    Ok(resume) => resume,
                    Err(e) => {
                        tracing::error!("failed to retrieve resume {id}: {e:#}");
                        prompt::FALLBACK.to_owned()
                    }
                };
                prompt::with_resume(template, &resume, query)
            }
        }
    }

    async fn resume(&self, id: &str) -> Result<String> {
        self.documents.check().await?;
        let response = self.documents.fetch(id).await?;
        prompt::resume_content(&response)
    }
}

impl<M: Model, S: Search, D: Documents> Agent for SearchAgent<M, S, D> {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn assist<E: EventSink>(&self, query: Query, handler: ResponseHandler<E>) -> Result<()> {
        tracing::info!("assisting query {}", query.id);
        handler
            .emit_text_block(events::SEARCH, SEARCH_NOTICE)
            .await?;

        let results = self.search(&query.prompt).await?;
        if !results.results.is_empty() {
            handler
                .emit_json(events::SOURCES, json!({ "results": results.results }))
                .await?;
        }
        if !results.images.is_empty() {
            handler
                .emit_json(events::IMAGES, json!({ "images": results.images }))
                .await?;
        }

        let stream = handler.create_text_stream(events::FINAL_RESPONSE);
        let template = template::load(&self.config.template).await?;
        let prompt = self.compose(&template, &query.prompt).await;

        let mut response = StreamedResponse::default();
        let chunks = self.model.stream(&prompt);
        pin_mut!(chunks);
        while let Some(chunk) = chunks.next().await {
            let chunk = chunk?;
            stream.emit_chunk(chunk.as_str()).await?;
            response.push(chunk);
        }
        tracing::debug!("streamed {} chunks", response.chunks().len());

        response.write(&self.config.response_log).await?;
        stream.complete().await?;
        handler.complete().await
    }
}
