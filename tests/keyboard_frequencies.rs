//! End-to-end frequencies for every tuning system.

use pretty_assertions::assert_eq;
use temperament::{
    calculate_frequency, generate_tuning_table, populate, populate_with_table, table_frequency,
    tonic_frequency, Keyboard, NoteName, NoteRange, PitchClass, Ratio, TuningConfig, TuningSystem,
    TuningTable,
};

fn note(name: &str) -> NoteName {
    name.parse().unwrap()
}

fn keyboard(base_frequency: f64, system: TuningSystem) -> Keyboard {
    populate(base_frequency, system, NoteRange::default()).unwrap()
}

fn freq(keyboard: &Keyboard, name: &str) -> f64 {
    keyboard
        .frequency(&note(name))
        .unwrap_or_else(|| panic!("{name} missing from keyboard"))
}

#[test]
fn test_equal_temperament_end_to_end() {
    let keyboard = keyboard(440.0, TuningSystem::Equal);
    println!("C4 = {:.4} Hz", freq(&keyboard, "C4"));
    assert!((freq(&keyboard, "C4") - 261.63).abs() < 0.01);
    assert_eq!(freq(&keyboard, "A4"), 440.0);
    assert!((freq(&keyboard, "A3") - 220.0).abs() < 1e-9);
    assert!((freq(&keyboard, "A5") - 880.0).abs() < 1e-9);
}

#[test]
fn test_just_intonation_end_to_end() {
    let keyboard = keyboard(440.0, TuningSystem::Just);
    let c4 = freq(&keyboard, "C4");
    assert!((freq(&keyboard, "G4") - 392.45).abs() < 0.05);
    assert!((freq(&keyboard, "E4") - 327.04).abs() < 0.05);
    assert!((freq(&keyboard, "G4") / c4 - 1.5).abs() < 1e-12);
    assert!((freq(&keyboard, "E4") / c4 - 1.25).abs() < 1e-12);
}

#[test]
fn test_alternate_reference_frequency() {
    let keyboard = keyboard(432.0, TuningSystem::Equal);
    assert_eq!(freq(&keyboard, "A4"), 432.0);

    let c4 = freq(&keyboard, "C4");
    println!("C4 at A4 = 432 Hz: {:.4} Hz", c4);
    assert!((c4 - 261.6256 * 432.0 / 440.0).abs() < 0.001);
    assert!((c4 - 257.02).abs() < 0.2);
}

#[test]
fn test_reference_pinned_in_every_system() {
    for system in TuningSystem::ALL {
        for base in [400.0, 415.3, 440.0, 466.16, 480.0] {
            assert_eq!(freq(&keyboard(base, system), "A4"), base, "{system} at {base}");
        }
    }
}

#[test]
fn test_octave_doubling_in_every_system() {
    for system in TuningSystem::ALL {
        let table = generate_tuning_table(system);
        for pitch_class in ["C", "C#", "E", "F#", "G", "A", "A#", "B"] {
            let at = |octave: u8| {
                table_frequency(note(&format!("{pitch_class}{octave}")), 440.0, &table)
            };
            assert!((at(5) - 2.0 * at(4)).abs() < 1e-9, "{system} {pitch_class}");
            assert!((at(3) - at(4) / 2.0).abs() < 1e-9, "{system} {pitch_class}");
        }
    }
}

#[test]
fn test_octave_doubling_through_string_api() {
    for (ratio, cents) in [(Ratio::new(1, 1), 0.0), (Ratio::new(9, 8), 203.9), (Ratio::new(1, 1), 193.2)] {
        let c4 = calculate_frequency("D4", 440.0, ratio, cents).unwrap();
        let c5 = calculate_frequency("D5", 440.0, ratio, cents).unwrap();
        let c3 = calculate_frequency("D3", 440.0, ratio, cents).unwrap();
        assert!((c5 - 2.0 * c4).abs() < 1e-9);
        assert!((c3 - c4 / 2.0).abs() < 1e-9);
    }
}

#[test]
fn test_every_frequency_is_positive_and_finite() {
    for system in TuningSystem::ALL {
        for (name, config) in keyboard(440.0, system).iter() {
            assert!(
                config.frequency.is_finite() && config.frequency > 0.0,
                "{system} {name}: {}",
                config.frequency
            );
        }
    }
}

#[test]
fn test_frequencies_ascend_except_well_tuned_piano() {
    for system in TuningSystem::ALL {
        if system == TuningSystem::YoungWellTuned {
            continue;
        }
        let keyboard = keyboard(440.0, system);
        let frequencies: Vec<f64> = keyboard.iter().map(|(_, c)| c.frequency).collect();
        assert!(
            frequencies.windows(2).all(|w| w[0] < w[1]),
            "{system} does not ascend"
        );
    }
}

#[test]
fn test_meantone_pure_third() {
    let keyboard = keyboard(440.0, TuningSystem::QuarterCommaMeantone);
    let third = freq(&keyboard, "E4") / freq(&keyboard, "C4");
    assert!((third - 1.25).abs() < 0.001);
    let fifth = freq(&keyboard, "G4") / freq(&keyboard, "C4");
    assert!(fifth < 1.5);
}

#[test]
fn test_regeneration_is_idempotent() {
    for system in TuningSystem::ALL {
        let first = keyboard(440.0, system);
        let second = keyboard(440.0, system);
        assert_eq!(first, second);
    }
}

#[test]
fn test_saved_configuration_replaces_whole_keyboard() {
    let original = keyboard(440.0, TuningSystem::KirnbergerIII);
    let edited = original.with_ratio(PitchClass::D, "9/8");
    let config = TuningConfig::from_keyboard("kirnberger with pure D", &edited, 3.0);

    let json = config.to_json().unwrap();
    let restored = TuningConfig::from_json(&json).unwrap().to_keyboard().unwrap();

    assert_eq!(restored.len(), edited.len());
    assert_eq!(restored.to_notes_map(), edited.to_notes_map());
}

#[test]
fn test_stored_table_with_bad_entries_still_plays() {
    let mut json = serde_json::to_value(generate_tuning_table(TuningSystem::Just)).unwrap();
    json["parameters"][0]["ratio"] = serde_json::json!({ "numerator": 3, "denominator": 2 });
    json["parameters"][11]["ratio"] = serde_json::json!({ "numerator": 0, "denominator": 1 });
    let table: TuningTable = serde_json::from_value(json).unwrap();

    let keyboard = populate_with_table(440.0, table, NoteRange::default()).unwrap();
    assert!(keyboard.iter().all(|(_, c)| c.frequency.is_finite() && c.frequency > 0.0));
    assert!((freq(&keyboard, "C4") - tonic_frequency(440.0, PitchClass::C)).abs() < 1e-9);
    assert_eq!(freq(&keyboard, "A4"), 440.0);
}
