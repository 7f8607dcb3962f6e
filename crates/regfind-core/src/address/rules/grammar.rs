//! Genitive to nominative rewriting for region phrases.
//!
//! Region matching only understands nominative phrasing ("ивановская
//! область", "пермский край"). Addresses often use the genitive
//! ("ивановской области", "пермского края"), so the text is rewritten by an
//! ordered list of rules before the region scan runs. Every edit is recorded
//! so positions in the rewritten copy can be mapped back to the input.

use regex::Regex;
use tracing::trace;

/// A single text rewrite applied ahead of region matching.
///
/// Each capture group of `pattern` is replaced by the ending at the same
/// index in `endings`; the rest of the match is kept as is.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    /// Short identifier used in logs.
    pub name: &'static str,
    pub pattern: Regex,
    pub endings: &'static [&'static str],
}

/// One replaced range, in the coordinates before and after the rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit {
    pub old_start: usize,
    pub old_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl RewriteRule {
    pub fn new(name: &'static str, pattern: Regex, endings: &'static [&'static str]) -> Self {
        Self {
            name,
            pattern,
            endings,
        }
    }

    /// Apply the rule to every non-overlapping occurrence.
    ///
    /// Returns the rewritten text and the edits made, in text order.
    pub fn apply(&self, text: &str) -> (String, Vec<Edit>) {
        let mut rewritten = String::with_capacity(text.len());
        let mut edits = Vec::new();
        let mut last = 0;

        for caps in self.pattern.captures_iter(text) {
            let groups = caps.iter().skip(1).zip(self.endings);
            for (group, ending) in groups {
                let Some(group) = group else {
                    continue;
                };

                rewritten.push_str(&text[last..group.start()]);
                let new_start = rewritten.len();
                rewritten.push_str(ending);

                edits.push(Edit {
                    old_start: group.start(),
                    old_end: group.end(),
                    new_start,
                    new_end: rewritten.len(),
                });
                last = group.end();
            }
        }

        rewritten.push_str(&text[last..]);
        (rewritten, edits)
    }
}

/// A rewritten copy of a text that remembers where it was changed.
#[derive(Debug, Clone)]
pub struct RewrittenText {
    pub text: String,
    /// Edits per applied rule, in application order.
    stages: Vec<Vec<Edit>>,
}

impl RewrittenText {
    /// Map a byte offset in the rewritten text to the input text.
    ///
    /// Offsets inside a replaced ending are clamped to the original ending.
    pub fn original_offset(&self, pos: usize) -> usize {
        self.stages
            .iter()
            .rev()
            .fold(pos, |pos, edits| map_back(edits, pos))
    }
}

fn map_back(edits: &[Edit], pos: usize) -> usize {
    let mut shifted = pos;

    for edit in edits {
        if pos >= edit.new_end {
            shifted = pos + edit.old_end - edit.new_end;
        } else if pos > edit.new_start {
            let inside = pos - edit.new_start;
            return edit.old_start + inside.min(edit.old_end - edit.old_start);
        } else {
            break;
        }
    }

    shifted
}

/// Apply `rules` in order to a copy of `text`.
pub fn apply_rewrites(text: &str, rules: &[RewriteRule]) -> RewrittenText {
    let mut current = text.to_owned();
    let mut stages = Vec::new();

    for rule in rules {
        let (rewritten, edits) = rule.apply(&current);
        if edits.is_empty() {
            continue;
        }

        trace!("Rewrite rule {} made {} edits", rule.name, edits.len());
        current = rewritten;
        stages.push(edits);
    }

    RewrittenText {
        text: current,
        stages,
    }
}
