use crate::model::{SearchHit, Section};

const SNIPPET_LEN: usize = 200;

/// Score floor for title hits; content-only scores stay strictly below it.
const TITLE_BONUS: u32 = 100;

/// Case-insensitive substring search over section titles and content.
///
/// Title matches outrank content-only matches; within a rank, document
/// order is preserved. Returns at most `limit` hits.
pub fn search(sections: &[Section], query: &str, limit: usize) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = Vec::new();
    for section in sections {
        let title_hit = section.title.to_lowercase().contains(&needle);
        let content_lower = section.content.to_lowercase();
        let content_matches = content_lower.matches(&needle).count() as u32;

        if !title_hit && content_matches == 0 {
            continue;
        }

        // Title hits always score at least TITLE_BONUS; content-only hits
        // are capped below it, so no occurrence count can promote a
        // content-only section above a title match.
        let score = if title_hit {
            TITLE_BONUS + content_matches
        } else {
            content_matches.min(TITLE_BONUS - 1)
        };
        hits.push(SearchHit {
            section_id: section.section_id.clone(),
            title: section.title.clone(),
            page: section.page,
            snippet: snippet(&section.content),
            score,
        });
    }

    // Stable sort keeps document order within equal scores.
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(limit);
    hits
}

/// Leading slice of the content, cut at a char boundary, with an ellipsis
/// when truncated.
fn snippet(content: &str) -> String {
    if content.chars().count() <= SNIPPET_LEN {
        return content.to_string();
    }
    let cut: String = content.chars().take(SNIPPET_LEN).collect();
    format!("{}...", cut)
}
