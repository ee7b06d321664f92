use super::client::SearXNGClient;
use super::tools::{self, SearchTool};
use super::types::*;
use crate::config::SearchConfig;
use rmcp::{
    model::{
        CallToolResult, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, Error as RmcpError, ServerHandler,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SearXNGServer {
    client: SearXNGClient,
}

#[tool(tool_box)]
impl SearXNGServer {
    pub fn new(config: Arc<SearchConfig>) -> Self {
        Self {
            client: SearXNGClient::new(config),
        }
    }

    /// Runs a registered tool and converts its output for the host.
    pub async fn run(&self, tool: &SearchTool, request: SearchToolRequest) -> FormattedOutput {
        log::debug!("Tool {} called with query {:?}", tool.name, request.query);
        self.client
            .execute(SearchRequest::new(request, tool.category), tool.style)
            .await
    }

    #[tool(
        description = "Search the web using your self-hosted SearXNG instance. Returns web results from multiple search engines."
    )]
    async fn search(
        &self,
        #[tool(aggr)] request: SearchToolRequest,
    ) -> Result<CallToolResult, RmcpError> {
        Ok(self.run(&tools::WEB_SEARCH, request).await.into())
    }

    #[tool(description = "Search for news articles using your SearXNG instance. Returns news results.")]
    async fn search_news(
        &self,
        #[tool(aggr)] request: SearchToolRequest,
    ) -> Result<CallToolResult, RmcpError> {
        Ok(self.run(&tools::NEWS_SEARCH, request).await.into())
    }

    #[tool(
        description = "Search for images using your SearXNG instance. Returns image URLs and metadata."
    )]
    async fn search_images(
        &self,
        #[tool(aggr)] request: SearchToolRequest,
    ) -> Result<CallToolResult, RmcpError> {
        Ok(self.run(&tools::IMAGE_SEARCH, request).await.into())
    }

    #[tool(
        description = "Search for videos from YouTube, Vimeo, and other platforms. Returns video URLs and metadata."
    )]
    async fn search_videos(
        &self,
        #[tool(aggr)] request: SearchToolRequest,
    ) -> Result<CallToolResult, RmcpError> {
        Ok(self.run(&tools::VIDEO_SEARCH, request).await.into())
    }

    #[tool(
        description = "Search for code repositories on GitHub, GitLab, and other platforms. Returns repository information."
    )]
    async fn search_repos(
        &self,
        #[tool(aggr)] request: SearchToolRequest,
    ) -> Result<CallToolResult, RmcpError> {
        Ok(self.run(&tools::REPO_SEARCH, request).await.into())
    }

    #[tool(
        description = "Get a direct answer to a factual question. Best for \"what is\", \"who is\", \"when did\" type questions."
    )]
    async fn quick_answer(
        &self,
        #[tool(aggr)] request: SearchToolRequest,
    ) -> Result<CallToolResult, RmcpError> {
        Ok(self.run(&tools::QUICK_ANSWER, request).await.into())
    }
}

#[tool(tool_box)]
impl ServerHandler for SearXNGServer {
    fn get_info(&self) -> ServerInfo {
        let config = self.client.config();
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(format!(
                "Private web search through the SearXNG instance at {}.\n\n\
                Tools:\n\
                - search: general web results\n\
                - search_news: news articles with publish dates\n\
                - search_images: image URLs, thumbnails and source pages\n\
                - search_videos: videos from YouTube, Vimeo and others\n\
                - search_repos: code repositories\n\
                - quick_answer: direct answers to factual questions\n\n\
                Every tool takes a 'query' (max 500 characters) and an optional 'count' (1-100, default {}).",
                config.base_url, config.max_results
            )),
        }
    }
}
