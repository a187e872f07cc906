//! Note identifier and ratio/cents converter, exercised through the public API.

use temperament::{
    base_name, cents_to_ratio, octave_of, parse_note_name, parse_ratio_string, ratio_to_cents,
    semitone_offset_from_reference, NoteName, Ratio, TuningError,
};

#[test]
fn test_note_names_round_trip() {
    for name in ["C0", "C#1", "D2", "D#3", "E4", "F5", "F#6", "G7", "G#8", "A9", "A#4", "B4"] {
        let parsed = parse_note_name(name).unwrap();
        assert_eq!(parsed.to_string(), name);
    }
}

#[test]
fn test_midi_like_indices() {
    let index = |s: &str| parse_note_name(s).unwrap().midi_index();
    assert_eq!(index("A4"), 69);
    assert_eq!(index("C4"), 60);
    assert_eq!(index("C5"), 72);
    assert_eq!(index("C3"), 48);
    assert_eq!(index("G4"), 67);
    assert_eq!(index("F#3"), 54);
}

#[test]
fn test_semitone_offsets() {
    assert_eq!(semitone_offset_from_reference("A4"), Ok(0));
    assert_eq!(semitone_offset_from_reference("C4"), Ok(-9));
    assert_eq!(semitone_offset_from_reference("C5"), Ok(3));
    assert_eq!(semitone_offset_from_reference("A3"), Ok(-12));
    assert_eq!(semitone_offset_from_reference("A5"), Ok(12));
    assert_eq!(NoteName::REFERENCE.semitone_offset_from_reference(), 0);
}

#[test]
fn test_strict_and_lenient_paths_disagree_on_bad_input() {
    assert_eq!(
        semitone_offset_from_reference("A"),
        Err(TuningError::InvalidNoteName("A".to_string()))
    );
    assert_eq!(base_name("A"), "");
    assert_eq!(octave_of("A"), 4);
}

#[test]
fn test_ratio_to_cents_known_intervals() {
    for (n, d, cents) in [(1, 1, 0.0), (3, 2, 702.0), (4, 3, 498.0), (5, 4, 386.0), (6, 5, 316.0)] {
        let got = ratio_to_cents(n, d);
        println!("{}/{} -> {:.3} cents", n, d, got);
        assert!((got - cents).abs() < 1.0, "{n}/{d} gave {got}");
    }
}

#[test]
fn test_cents_to_ratio_known_intervals() {
    assert_eq!(cents_to_ratio(0.0), Ratio::new(1, 1));
    for (cents, value) in [(702.0, 1.5), (498.0, 1.333), (386.0, 1.25)] {
        let ratio = cents_to_ratio(cents);
        println!("{} cents -> {}", cents, ratio);
        assert!((ratio.value() - value).abs() < 0.01, "{cents} gave {ratio}");
    }
}

#[test]
fn test_cents_round_trip_stays_close() {
    let mut cents = -1200.0;
    while cents <= 3600.0 {
        let back = cents_to_ratio(cents).cents();
        assert!((back - cents).abs() < 1.0, "{cents} came back as {back}");
        cents += 37.5;
    }
}

#[test]
fn test_ratio_strings() {
    assert_eq!(parse_ratio_string("3/2"), Ratio::new(3, 2));
    assert_eq!(parse_ratio_string("3 / 2"), Ratio::new(3, 2));
    assert_eq!(parse_ratio_string(""), Ratio::new(1, 1));
    assert_eq!(parse_ratio_string("3/0"), Ratio::new(1, 1));
    assert_eq!(parse_ratio_string("abc"), Ratio::new(1, 1));
}
