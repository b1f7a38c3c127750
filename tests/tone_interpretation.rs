use tone_reader::tone::{interpret_social, Alternative, Confidence, Tone, GUESS_NOTE, UNKNOWN_NOTE};
use tone_reader::EmotionScore;

fn ranking(pairs: &[(&str, f64)]) -> Vec<EmotionScore> {
    pairs
        .iter()
        .map(|(label, score)| EmotionScore::new(*label, *score))
        .collect()
}

#[test]
fn empty_ranking_is_unknown_not_an_error() {
    let verdict = interpret_social("anything", &[]);

    assert_eq!(verdict.tone, Tone::Unknown);
    assert_eq!(verdict.confidence, Confidence::Low);
    assert_eq!(verdict.explanation, "Not enough information to infer tone.");
    assert_eq!(verdict.note, UNKNOWN_NOTE);
    assert!(verdict.alternatives.is_none());

    let value = serde_json::to_value(&verdict).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "tone": "unknown",
            "confidence": "low",
            "explanation": "Not enough information to infer tone.",
            "note": "This is an automated guess, not a fact."
        })
    );
}

#[test]
fn single_strong_joy_is_friendly_with_high_confidence() {
    let verdict = interpret_social("Great news", &ranking(&[("joy", 0.85)]));

    assert_eq!(verdict.tone, Tone::FriendlyPositive);
    assert_eq!(verdict.confidence, Confidence::High);
    assert_eq!(verdict.explanation, "Sounds positive or friendly.");
    assert_eq!(verdict.note, GUESS_NOTE);
    assert!(verdict.alternatives.is_none());
}

#[test]
fn weak_single_label_cannot_be_ambiguous() {
    let verdict = interpret_social("hm", &ranking(&[("sadness", 0.05)]));
    assert_eq!(verdict.tone, Tone::HurtSad);
    assert_eq!(verdict.confidence, Confidence::Medium);
    assert!(verdict.alternatives.is_none());
}

#[test]
fn joy_with_tension_reads_as_teasing() {
    let verdict = interpret_social(
        "Nice work on that",
        &ranking(&[("joy", 0.60), ("anger", 0.25)]),
    );

    assert_eq!(verdict.tone, Tone::JokingTeasing);
    assert_eq!(verdict.confidence, Confidence::Medium);
    assert_eq!(
        verdict.explanation,
        "Could be joking/teasing (positive but with some tension)."
    );
    assert!(verdict.alternatives.is_none());
}

#[test]
fn joy_with_mild_or_benign_second_stays_friendly() {
    let mild = interpret_social("ok", &ranking(&[("joy", 0.75), ("fear", 0.15)]));
    assert_eq!(mild.tone, Tone::FriendlyPositive);
    assert_eq!(mild.confidence, Confidence::High);

    let benign = interpret_social("ok", &ranking(&[("joy", 0.60), ("surprise", 0.30)]));
    assert_eq!(benign.tone, Tone::FriendlyPositive);
    assert_eq!(benign.confidence, Confidence::Medium);
}

#[test]
fn labels_map_to_tones_and_strength() {
    let cases = [
        ("anger", 0.90, Tone::CriticalAngry, Confidence::High),
        ("disgust", 0.50, Tone::CriticalAngry, Confidence::Medium),
        ("sadness", 0.70, Tone::HurtSad, Confidence::High),
        ("fear", 0.69, Tone::WorriedAnxious, Confidence::Medium),
        ("surprise", 0.95, Tone::SurprisedConfused, Confidence::Medium),
        ("neutral", 0.95, Tone::NeutralUnclear, Confidence::Low),
        ("love", 0.80, Tone::NeutralUnclear, Confidence::Low),
    ];

    for (label, score, tone, confidence) in cases {
        let verdict = interpret_social("message", &ranking(&[(label, score), ("other", 0.01)]));
        assert_eq!(verdict.tone, tone, "label {}", label);
        assert_eq!(verdict.confidence, confidence, "label {}", label);
        assert!(verdict.alternatives.is_none(), "label {}", label);
    }
}

#[test]
fn close_scores_downgrade_every_branch() {
    for label in ["joy", "anger", "disgust", "sadness", "fear", "surprise", "neutral"] {
        let verdict = interpret_social("message", &ranking(&[(label, 0.45), ("sadness", 0.40)]));

        assert_eq!(verdict.confidence, Confidence::Low, "label {}", label);
        assert_eq!(
            verdict.explanation,
            "Message may have multiple interpretations (model is uncertain)."
        );
        assert_eq!(
            verdict.alternatives,
            Some(vec![
                Alternative {
                    emotion_hint: label.to_string(),
                    score: 0.45,
                },
                Alternative {
                    emotion_hint: "sadness".to_string(),
                    score: 0.4,
                },
            ])
        );
    }
}

#[test]
fn ambiguity_downgrades_tension_override_but_keeps_its_tone() {
    let verdict = interpret_social("ha", &ranking(&[("joy", 0.40), ("anger", 0.35)]));

    assert_eq!(verdict.tone, Tone::JokingTeasing);
    assert_eq!(verdict.confidence, Confidence::Low);
    assert!(verdict.alternatives.is_some());
}

#[test]
fn alternatives_are_rounded_to_four_places() {
    let verdict = interpret_social("x", &ranking(&[("fear", 0.512345), ("sadness", 0.48761)]));
    let alternatives = verdict.alternatives.unwrap();
    assert_eq!(alternatives[0].score, 0.5123);
    assert_eq!(alternatives[1].score, 0.4876);
}

#[test]
fn laugh_emoji_with_teasing_word_skips_ambiguity() {
    let verdict = interpret_social(
        "Oh sure, great plan \u{1F602}",
        &ranking(&[("joy", 0.41), ("anger", 0.40)]),
    );

    assert_eq!(verdict.tone, Tone::JokingTeasing);
    assert_eq!(verdict.confidence, Confidence::Medium);
    assert_eq!(
        verdict.explanation,
        "Emoji + wording suggests a teasing/joking tone (possibly a light jab)."
    );
    assert!(verdict.alternatives.is_none());
}

#[test]
fn teasing_shortcut_overrides_a_negative_top_label() {
    let verdict = interpret_social(
        "Late AGAIN \u{1F609}",
        &ranking(&[("anger", 0.92), ("disgust", 0.05)]),
    );
    assert_eq!(verdict.tone, Tone::JokingTeasing);
    assert_eq!(verdict.confidence, Confidence::Medium);
}

#[test]
fn teasing_needs_both_emoji_and_wording() {
    let emotions = ranking(&[("anger", 0.92), ("disgust", 0.05)]);

    let emoji_only = interpret_social("Late \u{1F602}", &emotions);
    assert_eq!(emoji_only.tone, Tone::CriticalAngry);

    let words_only = interpret_social("yeah right", &emotions);
    assert_eq!(words_only.tone, Tone::CriticalAngry);

    let other_emoji = interpret_social("sure \u{1F621}", &emotions);
    assert_eq!(other_emoji.tone, Tone::CriticalAngry);
}

#[test]
fn teasing_shortcut_does_not_apply_without_emotions() {
    let verdict = interpret_social("sure \u{1F602}", &[]);
    assert_eq!(verdict.tone, Tone::Unknown);
}

#[test]
fn gap_of_exactly_the_margin_is_not_ambiguous() {
    let verdict = interpret_social("ok", &ranking(&[("joy", 0.62), ("anger", 0.50)]));

    assert_eq!(verdict.tone, Tone::JokingTeasing);
    assert_eq!(verdict.confidence, Confidence::Medium);
    assert!(verdict.alternatives.is_none());
}

#[test]
fn tension_at_threshold_triggers_teasing() {
    let verdict = interpret_social("ok", &ranking(&[("joy", 0.60), ("fear", 0.20)]));

    assert_eq!(verdict.tone, Tone::JokingTeasing);
    assert_eq!(verdict.confidence, Confidence::Medium);
    assert!(verdict.alternatives.is_none());
}

#[test]
fn joy_at_strength_threshold_is_high_confidence() {
    let verdict = interpret_social("ok", &ranking(&[("joy", 0.70), ("neutral", 0.05)]));

    assert_eq!(verdict.tone, Tone::FriendlyPositive);
    assert_eq!(verdict.confidence, Confidence::High);
}

#[test]
fn blank_second_label_skips_the_downgrade() {
    let verdict = interpret_social("ok", &ranking(&[("joy", 0.50), ("", 0.45)]));

    assert_eq!(verdict.tone, Tone::FriendlyPositive);
    assert_eq!(verdict.confidence, Confidence::Medium);
    assert!(verdict.alternatives.is_none());
}
