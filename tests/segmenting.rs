use hansard_extract::segment::{debates, speeches};

const TOPICAL: &str = "Topical Questions\nMr Smith (Leeds) (Labour): What steps is the Minister taking on flood defences?\nMs Jones: We are reviewing options.";

#[test]
fn known_section_name_becomes_the_title() {
    let sections = debates::segment(TOPICAL);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "Topical Questions");
}

#[test]
fn numbered_question_marker_ends_the_title() {
    let raw = "Flood Defences\n3. Mr Smith (Leeds) (Labour): What steps is the Minister taking on flood defences?\n";
    let sections = debates::segment(raw);
    assert_eq!(sections[0].title, "Flood Defences");
}

#[test]
fn bracketed_reference_marker_ends_the_title() {
    let raw = "Welfare Reform [908765]\nThe Secretary of State: We will publish a White Paper.\n";
    let sections = debates::segment(raw);
    assert_eq!(sections[0].title, "Welfare Reform");
}

#[test]
fn no_headings_degrades_to_single_placeholder_section() {
    let sections = debates::segment("an untitled procedural note");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, debates::FALLBACK_TITLE);
    assert_eq!(sections[0].text, "an untitled procedural note");
}

#[test]
fn empty_input_yields_placeholder_section_and_no_speeches() {
    let sections = debates::segment("");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, debates::FALLBACK_TITLE);
    assert!(speeches::segment(&sections[0].text).is_empty());
}

#[test]
fn sections_partition_the_text_from_the_first_boundary() {
    let raw = "Business of the House\nMr Speaker: The schedule follows.\nTopical Questions\nMs Jones (Labour): What progress has been made on flood defences?\n";
    let sections = debates::segment(raw);
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].title, "Business of the House");
    assert_eq!(sections[1].title, "Topical Questions");

    // Contiguous and non-overlapping: each section body occurs in order and
    // the gaps between them are whitespace only.
    let mut cursor = 0;
    for section in &sections {
        let start = raw[cursor..]
            .find(&section.text)
            .map(|offset| cursor + offset)
            .expect("section text present in source");
        assert!(raw[cursor..start].trim().is_empty());
        cursor = start + section.text.len();
    }
    assert!(raw[cursor..].trim().is_empty());
}

#[test]
fn adjacent_headings_keep_distinct_sections() {
    let raw = "Topical Questions\nBusiness of the House\nMr Speaker: Order.";
    let sections = debates::segment(raw);
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].text, "Topical Questions");
    assert!(speeches::segment(&sections[0].text).is_empty());
}

#[test]
fn splits_speeches_on_speaker_lines() {
    let turns = speeches::segment(TOPICAL);
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].speaker_raw, "Mr Smith (Leeds) (Labour)");
    assert_eq!(
        turns[0].speech_text,
        "What steps is the Minister taking on flood defences?"
    );
    assert_eq!(turns[1].speaker_raw, "Ms Jones");
    assert_eq!(turns[1].speech_text, "We are reviewing options.");
}

#[test]
fn discards_text_before_the_first_speaker_line() {
    let turns = speeches::segment("Procedural preamble.\nMr Smith: Good morning.");
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].speech_text, "Good morning.");
}

#[test]
fn collapses_paragraph_breaks_into_markers() {
    let turns = speeches::segment("Ms Jones: First point.\n\n\nSecond point\nwraps here.");
    assert_eq!(
        turns[0].speech_text,
        "First point. <PARA> Second point wraps here."
    );
}
