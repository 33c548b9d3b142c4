//! Budgeted content trimming.
//!
//! When extracted text exceeds a fixed character budget, this module selects
//! a subset of it with a priority heuristic tuned for Brazilian legal text:
//! whole numbered articles first, then keyword-bearing paragraphs, then
//! arbitrary paragraphs, then a hard cut. Strategies are tried in order and
//! the first one that produces a selection wins.

use regex::Regex;

/// Suffix appended when whole legal articles were selected.
const ARTICLE_MARKER: &str = "\n\n[Conteúdo otimizado - artigos mais relevantes]";

/// Suffix appended when paragraphs were selected.
const PARAGRAPH_MARKER: &str = "\n\n[Conteúdo otimizado - parágrafos mais relevantes]";

/// Suffix appended on the hard-truncation fallback.
const TRUNCATION_MARKER: &str = "\n\n[Conteúdo truncado...]";

/// Keywords that promote a paragraph in the selection order.
const KEYWORDS: &[&str] = &["artigo", "lei", "código", "direito", "civil", "penal", "trabalhista"];

/// Configuration for content trimming.
///
/// The defaults carry the exact constants the selection heuristic is
/// calibrated for; changing them changes the stopping point of the greedy
/// accumulation.
#[derive(Debug, Clone)]
pub struct OptimizeConfig {
    /// Character budget the output should fit in (markers excluded).
    pub budget: usize,
    /// Characters reserved for the marker on the hard-truncation path.
    pub truncation_margin: usize,
    /// Paragraphs shorter than this are discarded before selection.
    pub min_paragraph_len: usize,
    /// Characters counted per join when accumulating paragraphs.
    pub separator_overhead: usize,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            budget: 12_000,
            truncation_margin: 100,
            min_paragraph_len: 30,
            separator_overhead: 2,
        }
    }
}

/// Reduce an over-long text to fit the default character budget.
///
/// Returns the input unchanged when it already fits. This function performs
/// no I/O and always returns a string; given the same input it always yields
/// the same output.
pub fn optimize_content(text: &str) -> String {
    optimize_content_with_config(text, &OptimizeConfig::default())
}

/// Reduce an over-long text to fit the configured character budget.
///
/// Strategies are applied in priority order: whole-article selection,
/// keyword-prioritized paragraph selection, hard truncation. The first
/// strategy that selects anything wins.
pub fn optimize_content_with_config(text: &str, config: &OptimizeConfig) -> String {
    if text.chars().count() <= config.budget {
        return text.to_string();
    }

    if let Some(out) = select_articles(text, config) {
        return out;
    }

    if let Some(out) = select_paragraphs(text, config) {
        return out;
    }

    truncate(text, config)
}

/// Cut the text into `Art. <n>` segments.
///
/// A segment runs from its `Art.` start to the next article start, the next
/// section/chapter/title heading, or the end of the text, and is trimmed.
fn article_segments(text: &str) -> Vec<&str> {
    let start_re = Regex::new(r"(?i)art\.\s*\d+").unwrap();
    let heading_re = Regex::new(r"(?i)CAPÍTULO|SEÇÃO|TÍTULO").unwrap();

    let starts: Vec<usize> = start_re.find_iter(text).map(|m| m.start()).collect();
    if starts.is_empty() {
        return Vec::new();
    }

    let headings: Vec<usize> = heading_re.find_iter(text).map(|m| m.start()).collect();

    let mut segments = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let next_article = starts.get(i + 1).copied().unwrap_or(text.len());
        let next_heading = headings.iter().copied().find(|&h| h > start).unwrap_or(text.len());
        let end = next_article.min(next_heading);
        segments.push(text[start..end].trim());
    }

    segments
}

/// Greedily accumulate whole articles in original order.
///
/// Stops before the first segment that would push the running total past the
/// budget; returns `None` when not even the first segment fits.
fn select_articles(text: &str, config: &OptimizeConfig) -> Option<String> {
    let mut selected = Vec::new();
    let mut total = 0usize;

    for segment in article_segments(text) {
        let len = segment.chars().count();
        if total + len > config.budget {
            break;
        }
        selected.push(segment);
        total += len;
    }

    if selected.is_empty() {
        return None;
    }

    Some(format!("{}{}", selected.join("\n\n"), ARTICLE_MARKER))
}

fn contains_keyword(paragraph: &str) -> bool {
    let lower = paragraph.to_lowercase();
    KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Accumulate paragraphs, keyword-bearing ones first.
///
/// Both passes walk the paragraphs in original order and count
/// `len + separator_overhead` per pick; the second pass fills the remaining
/// budget with whatever was not picked in the first. Selected keyword
/// paragraphs therefore come before filler paragraphs in the output, and the
/// overall document order is not restored.
fn select_paragraphs(text: &str, config: &OptimizeConfig) -> Option<String> {
    let paragraphs: Vec<&str> = text
        .split("\n\n")
        .filter(|p| p.chars().count() >= config.min_paragraph_len)
        .collect();

    let mut selected: Vec<&str> = Vec::new();
    let mut picked = vec![false; paragraphs.len()];
    let mut total = 0usize;

    for (i, paragraph) in paragraphs.iter().enumerate() {
        if !contains_keyword(paragraph) {
            continue;
        }
        let len = paragraph.chars().count();
        if total + len + config.separator_overhead > config.budget {
            break;
        }
        selected.push(paragraph);
        picked[i] = true;
        total += len + config.separator_overhead;
    }

    for (i, paragraph) in paragraphs.iter().enumerate() {
        if picked[i] {
            continue;
        }
        let len = paragraph.chars().count();
        if total + len + config.separator_overhead > config.budget {
            break;
        }
        selected.push(paragraph);
        picked[i] = true;
        total += len + config.separator_overhead;
    }

    if selected.is_empty() {
        return None;
    }

    Some(format!("{}{}", selected.join("\n\n"), PARAGRAPH_MARKER))
}

/// Keep the first `budget - truncation_margin` characters.
fn truncate(text: &str, config: &OptimizeConfig) -> String {
    let keep = config.budget.saturating_sub(config.truncation_margin);
    let head: String = text.chars().take(keep).collect();
    format!("{}{}", head, TRUNCATION_MARKER)
}
