//! News headline entities and the feed-merging logic behind the
//! "Bilateral Economic Intelligence" panel.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// One headline, already cleaned for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub source: String,
    pub published_at: Option<SystemTime>,
}

/// Lifecycle of the insights panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedStatus {
    #[default]
    Loading,
    Live,
    Unavailable,
    Disabled,
}

/// Interleave the articles from several feeds, newest first, keeping at
/// most `limit`. Articles without a publish date sort last.
pub fn merge_headlines(batches: Vec<Vec<Article>>, limit: usize) -> Vec<Article> {
    let mut combined: Vec<Article> = batches.into_iter().flatten().collect();
    combined.sort_by_key(|article| {
        std::cmp::Reverse(article.published_at.unwrap_or(UNIX_EPOCH))
    });
    combined.truncate(limit);
    combined
}

/// Drop HTML tags a feed may leave inside a headline.
pub fn strip_tags(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => output.push(ch),
            _ => {}
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn article(title: &str, age_secs: Option<u64>) -> Article {
        Article {
            title: title.to_string(),
            link: format!("https://example.com/{title}"),
            source: "Test Wire".to_string(),
            published_at: age_secs.map(|secs| UNIX_EPOCH + Duration::from_secs(1_700_000_000 - secs)),
        }
    }

    #[test]
    fn merge_sorts_newest_first_across_feeds() {
        let merged = merge_headlines(
            vec![
                vec![article("old", Some(3600)), article("newest", Some(10))],
                vec![article("middle", Some(600))],
            ],
            4,
        );
        let titles: Vec<&str> = merged.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["newest", "middle", "old"]);
    }

    #[test]
    fn merge_truncates_to_the_limit() {
        let merged = merge_headlines(
            vec![(0..10).map(|i| article(&format!("a{i}"), Some(i))).collect()],
            4,
        );
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn undated_articles_sort_last() {
        let merged = merge_headlines(
            vec![vec![article("undated", None), article("dated", Some(60))]],
            4,
        );
        assert_eq!(merged[0].title, "dated");
        assert_eq!(merged[1].title, "undated");
    }

    #[test]
    fn strip_tags_removes_markup_and_keeps_text() {
        assert_eq!(strip_tags("Plain headline"), "Plain headline");
        assert_eq!(
            strip_tags("<b>Tariffs</b> rise in <a href=\"x\">Italy</a>"),
            "Tariffs rise in Italy"
        );
        assert_eq!(strip_tags("<unclosed"), "");
    }
}
