//! Script-based language detection.
//!
//! A heuristic, not a classifier: it counts characters that belong to each
//! pack's script alphabet, so it separates scripts with disjoint character
//! ranges (Armenian, Cyrillic, Georgian) but not languages sharing a script.
use crate::{lang::LanguagePack, lang::ScriptBehaviour, registry::Registry};
use std::sync::Arc;

/// Best-scoring pack for `text`, or `None` when no pack scores.
///
/// Each pack scores its alphabet hits, capped at `max_keywords`. Ties go to
/// the earliest registered pack.
pub fn detect_language<'r>(
    registry: &'r Registry,
    text: &str,
    max_keywords: usize,
) -> Option<&'r Arc<LanguagePack>> {
    let packs = registry.available_packs();
    if packs.is_empty() || text.is_empty() {
        return None;
    }

    let scores: Vec<usize> = packs
        .iter()
        .map(|pack| pack.count_script_chars(text, max_keywords))
        .collect();

    let mut best: Option<(usize, &Arc<LanguagePack>)> = None;
    for (&score, pack) in scores.iter().zip(packs) {
        if score > best.map_or(0, |(s, _)| s) {
            best = Some((score, pack));
        }
    }

    let detected = best.map(|(_, pack)| pack);
    tracing::trace!(
        detected = detected.map(|p| p.code()),
        ?scores,
        "language detection"
    );
    detected
}
