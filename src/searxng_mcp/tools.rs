use super::format::ResultStyle;
use super::types::Category;

/// A host-callable search tool: a fixed category paired with a renderer.
#[derive(Debug, Clone, Copy)]
pub struct SearchTool {
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub style: ResultStyle,
}

pub const WEB_SEARCH: SearchTool = SearchTool {
    name: "search",
    description: "Search the web using your self-hosted SearXNG instance. Returns web results from multiple search engines.",
    category: Category::General,
    style: ResultStyle::General,
};

pub const NEWS_SEARCH: SearchTool = SearchTool {
    name: "search_news",
    description: "Search for news articles using your SearXNG instance. Returns news results.",
    category: Category::News,
    style: ResultStyle::News,
};

pub const IMAGE_SEARCH: SearchTool = SearchTool {
    name: "search_images",
    description: "Search for images using your SearXNG instance. Returns image URLs and metadata.",
    category: Category::Images,
    style: ResultStyle::Images,
};

pub const VIDEO_SEARCH: SearchTool = SearchTool {
    name: "search_videos",
    description: "Search for videos from YouTube, Vimeo, and other platforms. Returns video URLs and metadata.",
    category: Category::Videos,
    style: ResultStyle::Videos,
};

pub const REPO_SEARCH: SearchTool = SearchTool {
    name: "search_repos",
    description: "Search for code repositories on GitHub, GitLab, and other platforms. Returns repository information.",
    category: Category::It,
    style: ResultStyle::Repository,
};

pub const QUICK_ANSWER: SearchTool = SearchTool {
    name: "quick_answer",
    description: "Get a direct answer to a factual question. Best for \"what is\", \"who is\", \"when did\" type questions.",
    category: Category::General,
    style: ResultStyle::QuickAnswer,
};

/// Every registered tool, in registration order. New search types are
/// added here and given a handler in the MCP server.
pub static SEARCH_TOOLS: [SearchTool; 6] = [
    WEB_SEARCH,
    NEWS_SEARCH,
    IMAGE_SEARCH,
    VIDEO_SEARCH,
    REPO_SEARCH,
    QUICK_ANSWER,
];

pub fn find_tool(name: &str) -> Option<&'static SearchTool> {
    SEARCH_TOOLS.iter().find(|tool| tool.name == name)
}
