//! Surface cues that plausibly drove a tone reading: emoji, keywords,
//! heavy punctuation and shouting.
//!
//! Scans run in a fixed order and the result is capped, so table order is
//! also truncation priority.

use serde::{Deserialize, Serialize};

pub const MAX_HIGHLIGHTS: usize = 8;

const EMOJI_CUES: &[(&str, &str)] = &[
    ("\u{1F602}", "Laughing emoji often indicates humor/teasing."),
    ("\u{1F605}", "Nervous/laugh emoji can soften a message (possible teasing)."),
    ("\u{1F923}", "Strong laughter emoji indicates joking."),
    ("\u{1F609}", "Wink emoji can indicate teasing or sarcasm."),
    ("\u{1F621}", "Angry emoji may indicate frustration."),
    ("\u{2764}\u{FE0F}", "Heart emoji often indicates warmth/positivity."),
    ("\u{1F64F}", "May indicate request/thanks or emotional emphasis."),
];

// Plain substring matches on lower-cased text: "fine" also hits "refined".
const KEYWORD_CUES: &[(&str, &str)] = &[
    ("again", "May imply repetition/annoyance or a light jab."),
    ("sure", "Sometimes used in sarcastic/teasing replies (depends on context)."),
    ("fine", "Can be passive-aggressive in short replies."),
    ("whatever", "May indicate dismissal or frustration."),
    ("always", "Generalization can intensify criticism."),
    ("never", "Generalization can intensify criticism."),
    ("sorry", "Often signals apology or regret."),
    ("please", "Polite request; can soften tone."),
    ("thanks", "Gratitude; usually positive."),
];

const EXCLAMATION_REASON: &str = "Many exclamation marks may indicate strong emotion.";
const QUESTION_REASON: &str = "Many question marks may indicate confusion or pressure.";
const ALL_CAPS_REASON: &str = "ALL CAPS can be perceived as shouting/emphasis.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CueKind {
    Emoji,
    Keyword,
    Punctuation,
    Style,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    pub span: String,
    #[serde(rename = "type")]
    pub kind: CueKind,
    pub reason: String,
}

impl Cue {
    fn new(span: &str, kind: CueKind, reason: &str) -> Self {
        Self {
            span: span.to_string(),
            kind,
            reason: reason.to_string(),
        }
    }
}

pub fn extract_highlights(text: &str) -> Vec<Cue> {
    let lowercase = text.to_lowercase();
    let mut highlights = Vec::new();

    for &(emoji, reason) in EMOJI_CUES {
        if text.contains(emoji) {
            highlights.push(Cue::new(emoji, CueKind::Emoji, reason));
        }
    }

    for &(keyword, reason) in KEYWORD_CUES {
        if lowercase.contains(keyword) {
            highlights.push(Cue::new(keyword, CueKind::Keyword, reason));
        }
    }

    if repeated_mark(text, '!') {
        highlights.push(Cue::new("!!!", CueKind::Punctuation, EXCLAMATION_REASON));
    }
    if repeated_mark(text, '?') {
        highlights.push(Cue::new("???", CueKind::Punctuation, QUESTION_REASON));
    }

    let shouting = text
        .split_whitespace()
        .filter(|word| word.chars().count() >= 3)
        .any(is_all_caps);
    if shouting {
        highlights.push(Cue::new("ALL_CAPS", CueKind::Style, ALL_CAPS_REASON));
    }

    highlights.truncate(MAX_HIGHLIGHTS);
    highlights
}

fn repeated_mark(text: &str, mark: char) -> bool {
    let run = mark.to_string().repeat(3);
    text.contains(&run) || text.matches(mark).count() >= 3
}

/// At least one cased character and no lower-case ones, so "TIRED!!!"
/// counts while "123" does not.
fn is_all_caps(word: &str) -> bool {
    let mut cased = false;
    for ch in word.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            cased = true;
        }
    }
    cased
}
