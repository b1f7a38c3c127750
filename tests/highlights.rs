use tone_reader::cues::{extract_highlights, Cue, CueKind, MAX_HIGHLIGHTS};

fn spans(highlights: &[Cue]) -> Vec<&str> {
    highlights.iter().map(|cue| cue.span.as_str()).collect()
}

#[test]
fn shouting_with_exclamations_yields_punctuation_and_style() {
    let highlights = extract_highlights("I am SO TIRED of this!!!");

    assert_eq!(spans(&highlights), vec!["!!!", "ALL_CAPS"]);
    assert_eq!(highlights[0].kind, CueKind::Punctuation);
    assert_eq!(highlights[1].kind, CueKind::Style);
}

#[test]
fn short_capital_words_do_not_count_as_shouting() {
    let highlights = extract_highlights("I am SO tired of this OK");
    assert!(highlights.iter().all(|cue| cue.kind != CueKind::Style));
}

#[test]
fn tokens_without_letters_are_not_all_caps() {
    let highlights = extract_highlights("call 555 1234 now");
    assert!(highlights.is_empty());
}

#[test]
fn shouting_is_reported_once_as_a_marker() {
    let highlights = extract_highlights("STOP DOING THAT");
    let style: Vec<&Cue> = highlights
        .iter()
        .filter(|cue| cue.kind == CueKind::Style)
        .collect();
    assert_eq!(style.len(), 1);
    assert_eq!(style[0].span, "ALL_CAPS");
}

#[test]
fn scattered_marks_count_toward_punctuation() {
    let highlights = extract_highlights("why? how? when?");
    assert_eq!(spans(&highlights), vec!["???"]);

    let highlights = extract_highlights("yes! no! maybe!");
    assert_eq!(spans(&highlights), vec!["!!!"]);

    let highlights = extract_highlights("wait!! what??");
    assert!(highlights.is_empty());
}

#[test]
fn keywords_match_inside_longer_words() {
    let highlights = extract_highlights("A refined approach");
    assert_eq!(spans(&highlights), vec!["fine"]);
    assert_eq!(highlights[0].kind, CueKind::Keyword);
}

#[test]
fn scan_order_is_emoji_then_keywords_then_punctuation() {
    let highlights = extract_highlights("Thanks again 😂 really??? 🙏");
    assert_eq!(
        spans(&highlights),
        vec!["\u{1F602}", "\u{1F64F}", "again", "thanks", "???"]
    );
}

#[test]
fn output_is_capped_in_scan_order() {
    let text = "😂😅🤣😉😡❤️🙏 again sure fine whatever always never sorry please thanks!!! ??? LOUD";
    let highlights = extract_highlights(text);

    assert_eq!(highlights.len(), MAX_HIGHLIGHTS);
    assert!(highlights[..7].iter().all(|cue| cue.kind == CueKind::Emoji));
    assert_eq!(highlights[7].span, "again");
}

#[test]
fn never_exceeds_cap_for_repeated_cues() {
    let text = "sure 😂 !!! ".repeat(200);
    let highlights = extract_highlights(&text);
    assert!(highlights.len() <= MAX_HIGHLIGHTS);
    assert_eq!(spans(&highlights), vec!["\u{1F602}", "sure", "!!!"]);
}

#[test]
fn empty_and_plain_text_have_no_cues() {
    assert!(extract_highlights("").is_empty());
    assert!(extract_highlights("see you at noon").is_empty());
}

#[test]
fn extraction_is_deterministic() {
    let text = "Fine. Whatever 😡!!!";
    assert_eq!(extract_highlights(text), extract_highlights(text));
}

#[test]
fn serializes_kind_under_type_key() {
    let highlights = extract_highlights("please");
    let value = serde_json::to_value(&highlights).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "span": "please",
            "type": "keyword",
            "reason": "Polite request; can soften tone."
        }])
    );
}
