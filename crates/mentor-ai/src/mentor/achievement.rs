//! Hidden achievement tags appended by the mentor persona.
//!
//! The system prompt tells the model to end a reply with a tag such as
//! `||ACHIEVEMENT_HARD||` when the user proves they executed something.
//! The tags are stripped before display and turned into points.

/// Achievement tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Achievement {
    Simple,
    Hard,
    Extreme,
}

impl Achievement {
    pub const ALL: [Achievement; 3] = [Achievement::Simple, Achievement::Hard, Achievement::Extreme];

    pub fn tag(&self) -> &'static str {
        match self {
            Achievement::Simple => "||ACHIEVEMENT_SIMPLE||",
            Achievement::Hard => "||ACHIEVEMENT_HARD||",
            Achievement::Extreme => "||ACHIEVEMENT_EXTREME||",
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            Achievement::Simple => 10,
            Achievement::Hard => 50,
            Achievement::Extreme => 200,
        }
    }
}

/// Strip achievement tags from `reply`.
///
/// Returns the visible text (trailing whitespace trimmed) and the
/// achievements in the order they appeared.
pub fn extract_achievements(reply: &str) -> (String, Vec<Achievement>) {
    let mut found: Vec<(usize, Achievement)> = Achievement::ALL
        .iter()
        .flat_map(|a| reply.match_indices(a.tag()).map(move |(pos, _)| (pos, *a)))
        .collect();

    if found.is_empty() {
        return (reply.to_string(), Vec::new());
    }
    found.sort_by_key(|(pos, _)| *pos);

    let mut visible = reply.to_string();
    for achievement in Achievement::ALL {
        visible = visible.replace(achievement.tag(), "");
    }
    let visible = visible.trim_end().to_string();

    (visible, found.into_iter().map(|(_, a)| a).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_without_tags_is_unchanged() {
        let (text, found) = extract_achievements("## 🎯 O DIAGNÓSTICO\nAção.\n");
        assert_eq!(text, "## 🎯 O DIAGNÓSTICO\nAção.\n");
        assert!(found.is_empty());
    }

    #[test]
    fn trailing_tag_is_stripped() {
        let (text, found) = extract_achievements("Boa. Treinou na chuva.\n\n||ACHIEVEMENT_HARD||");
        assert_eq!(text, "Boa. Treinou na chuva.");
        assert_eq!(found, vec![Achievement::Hard]);
    }

    #[test]
    fn multiple_tags_keep_order() {
        let (text, found) =
            extract_achievements("Feito. ||ACHIEVEMENT_EXTREME|| ||ACHIEVEMENT_SIMPLE||");
        assert_eq!(text, "Feito.");
        assert_eq!(found, vec![Achievement::Extreme, Achievement::Simple]);
        let points: u32 = found.iter().map(Achievement::points).sum();
        assert_eq!(points, 210);
    }

    #[test]
    fn partial_tag_is_left_alone() {
        let (text, found) = extract_achievements("||ACHIEVEMENT_||");
        assert_eq!(text, "||ACHIEVEMENT_||");
        assert!(found.is_empty());
    }
}
