//! Agent construction from gateway configuration.

use crate::config::Config;
use agent::{ResumeSource, SearchAgent};
use anyhow::Result;
use docs::Composio;
use llm::{Client, General, OpenAI, endpoint};
use search::Tavily;

/// The agent served by the gateway.
pub type GatewayAgent = SearchAgent<OpenAI, Tavily, Option<Composio>>;

/// Validate `config` and build the agent with its collaborators.
///
/// Fails before any network access if a required key is missing.
pub fn build_agent(config: &Config) -> Result<GatewayAgent> {
    config.validate()?;
    let client = Client::new();

    let general = General {
        model: config.model.model.to_string(),
        temperature: config.model.temperature,
        max_tokens: config.model.max_tokens,
        usage: config.model.usage,
    };
    let base_url = config
        .model
        .base_url
        .as_deref()
        .unwrap_or(endpoint::FIREWORKS);
    let model = OpenAI::custom(client.clone(), &config.model.api_key, base_url, general)?;
    tracing::info!("model {} at {base_url}", config.model.model);

    let mut search = Tavily::new(client.clone(), &config.search.api_key)?
        .max_results(config.search.max_results);
    if let Some(url) = &config.search.base_url {
        search = search.base_url(url.as_str());
    }

    let mut agent_config = config.agent.clone();
    if config.search.enabled {
        agent_config.live_search = true;
    }
    tracing::info!(
        "live search {}",
        if agent_config.live_search { "enabled" } else { "disabled" }
    );

    let documents = match &config.documents {
        Some(documents) => {
            let mut composio =
                Composio::new(client, &documents.api_key)?.entity(documents.entity.as_str());
            if let Some(url) = &documents.base_url {
                composio = composio.base_url(url.as_str());
            }
            agent_config.resume = ResumeSource::Document {
                id: documents.document_id.clone(),
            };
            tracing::info!("resume from document {}", documents.document_id);
            Some(composio)
        }
        None => None,
    };

    Ok(SearchAgent::new(agent_config, model, search, documents))
}
