use super::types::{SearchResponsePayload, SearchResultItem};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// How a single result is rendered. Each tool is bound to one style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStyle {
    General,
    News,
    Images,
    Videos,
    Repository,
    QuickAnswer,
}

impl ResultStyle {
    pub fn render(&self, item: &SearchResultItem, index: usize) -> String {
        match self {
            ResultStyle::General => render_general(item, index),
            ResultStyle::News => render_news(item, index),
            ResultStyle::Images => render_image(item, index),
            ResultStyle::Videos => render_video(item, index),
            ResultStyle::Repository => render_repository(item, index),
            ResultStyle::QuickAnswer => render_quick_answer(item, index),
        }
    }
}

/// Renders a backend response for the host: optional direct answer, a
/// count header, every readable result in backend order, and related
/// searches. Entries that are not result records are skipped.
pub fn format_results(
    results: &[serde_json::Value],
    query: &str,
    style: ResultStyle,
    payload: &SearchResponsePayload,
) -> String {
    let mut text = String::new();

    if let Some(answer) = payload.answers.as_ref().and_then(|a| a.first()) {
        let answer = match answer.as_str() {
            Some(s) => s.to_string(),
            None => answer.to_string(),
        };
        text.push_str(&format!("💡 **Direct answer:**\n{}\n\n", answer));
    }

    let suggestions = payload
        .suggestions
        .as_ref()
        .filter(|s| !s.is_empty())
        .map(|s| s.join(", "));

    if results.is_empty() {
        text.push_str(&format!("No results found for \"{}\".\n\n", query));
        text.push_str("Suggestions:\n");
        text.push_str("- Try different keywords\n");
        text.push_str("- Use more general terms\n");
        text.push_str("- Check spelling\n");
        if let Some(suggestions) = suggestions {
            text.push_str(&format!("\nRelated searches: {}", suggestions));
        }
        return text;
    }

    text.push_str(&format!(
        "Found {} result{} for \"{}\":\n\n",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        query
    ));

    for (idx, raw) in results.iter().enumerate() {
        match serde_json::from_value::<SearchResultItem>(raw.clone()) {
            Ok(item) => text.push_str(&style.render(&item, idx)),
            Err(e) => log::warn!("Failed to format result {}: {}", idx, e),
        }
    }

    if let Some(suggestions) = suggestions {
        text.push_str(&format!("\n**Related searches:** {}", suggestions));
    }

    text
}

fn render_general(item: &SearchResultItem, idx: usize) -> String {
    let mut text = format!("{}. **{}**\n", idx + 1, title_or_untitled(item));
    push_line(&mut text, "", item.url.as_deref());
    if let Some(content) = &item.content {
        let (snippet, truncated) = truncate_chars(content, 200);
        text.push_str(&format!(
            "   {}{}\n",
            snippet,
            if truncated { "..." } else { "" }
        ));
    }
    text + "\n"
}

fn render_news(item: &SearchResultItem, idx: usize) -> String {
    let mut text = format!("{}. **{}**\n", idx + 1, title_or_untitled(item));
    push_line(&mut text, "", item.url.as_deref());
    push_published_date(&mut text, item);
    push_snippet(&mut text, item, 200);
    text + "\n"
}

fn render_image(item: &SearchResultItem, idx: usize) -> String {
    let mut text = format!("{}. **{}**\n", idx + 1, title_or_untitled(item));
    let image = item.img_src.as_deref().or(item.url.as_deref());
    push_line(&mut text, "🖼️  ", image);
    push_line(&mut text, "📐 Thumbnail: ", item.thumbnail_src.as_deref());
    if let Some(url) = &item.url {
        if item.img_src.as_deref() != Some(url.as_str()) {
            text.push_str(&format!("   🌐 Source: {}\n", url));
        }
    }
    text + "\n"
}

fn render_video(item: &SearchResultItem, idx: usize) -> String {
    let mut text = format!("{}. **{}**\n", idx + 1, title_or_untitled(item));
    push_line(&mut text, "🎬 ", item.url.as_deref());
    push_line(&mut text, "📸 Thumbnail: ", item.thumbnail.as_deref());
    push_published_date(&mut text, item);
    push_snippet(&mut text, item, 150);
    text + "\n"
}

fn render_repository(item: &SearchResultItem, idx: usize) -> String {
    let mut text = format!("{}. **{}**\n", idx + 1, title_or_untitled(item));
    push_line(&mut text, "💻 ", item.url.as_deref());
    push_snippet(&mut text, item, 200);
    text + "\n"
}

fn render_quick_answer(item: &SearchResultItem, idx: usize) -> String {
    let mut text = format!("{}. {}\n", idx + 1, title_or_untitled(item));
    push_line(&mut text, "", item.url.as_deref());
    push_snippet(&mut text, item, 300);
    text + "\n"
}

fn title_or_untitled(item: &SearchResultItem) -> &str {
    item.title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or("Untitled")
}

fn push_line(text: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        text.push_str(&format!("   {}{}\n", label, value));
    }
}

fn push_snippet(text: &mut String, item: &SearchResultItem, max_chars: usize) {
    if let Some(content) = &item.content {
        let (snippet, _) = truncate_chars(content, max_chars);
        text.push_str(&format!("   {}...\n", snippet));
    }
}

fn push_published_date(text: &mut String, item: &SearchResultItem) {
    if let Some(date) = item.published_date.as_deref().and_then(parse_published_date) {
        text.push_str(&format!("   📅 {}\n", date.format("%-m/%-d/%Y")));
    }
}

/// Best-effort parse of the `publishedDate` formats SearXNG engines emit.
pub fn parse_published_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Cuts `s` to at most `max_chars` characters; reports whether it did.
fn truncate_chars(s: &str, max_chars: usize) -> (&str, bool) {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (&s[..byte_idx], true),
        None => (s, false),
    }
}
