// Test flattening beat grids into timed sequences

use notegrid::{Beat, Note, NoteDuration, Sequence, TimedNote, TimingConfig};
use num_rational::Rational32;

fn note(text: &str) -> Note {
    text.parse().unwrap()
}

#[test]
fn test_measure_of_beats_flattens_in_order() {
    let mut first = Beat::new();
    first.fill(note("C4"));

    let mut second = Beat::new();
    second.add_eighth(note("E4"), 0).unwrap();
    second.add_eighth(note("G4"), 1).unwrap();

    let mut third = Beat::new();
    third.add_sixteenth(note("A4"), 0).unwrap();

    let fourth = Beat::new();

    let mut seq = Sequence::new();
    seq.extend_from_beats(&[first, second, third, fourth]);

    let entries: Vec<TimedNote> = seq.iter().copied().collect();
    assert_eq!(
        entries,
        [
            TimedNote::new(note("C4"), 8),
            TimedNote::new(note("E4"), 4),
            TimedNote::new(note("G4"), 4),
            TimedNote::new(note("A4"), 2),
            TimedNote::new(None, 6),
            TimedNote::new(None, 8),
        ]
    );
    assert_eq!(seq.total_length(), Rational32::new(1, 1));
    assert_eq!(seq.total_nanoseconds(), 2_000_000_000);
}

#[test]
fn test_timeline_follows_tempo() {
    let config = TimingConfig::from_json(r#"{"bpm": 240}"#).unwrap();
    let mut seq = Sequence::from_config(&config);
    seq.push(note("C4"), NoteDuration::Half);
    seq.push(note("D4"), NoteDuration::Quarter);

    let timeline = seq.timeline();
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[0].length_ns, 2_000_000_000);
    assert_eq!(timeline[1].start_ns, 2_000_000_000);
    assert_eq!(timeline[1].length_ns, 1_000_000_000);
}

#[test]
fn test_drain_front_to_back() {
    let mut seq = Sequence::new();
    for spelling in ["C4", "D4", "E4"] {
        seq.push(note(spelling), NoteDuration::Eighth);
    }

    let mut drained = Vec::new();
    while let Some(entry) = seq.pop_front() {
        assert_eq!(seq.nanoseconds(&entry), 250_000_000);
        drained.push(entry.note.unwrap().to_string());
    }
    assert_eq!(drained, ["C4", "D4", "E4"]);
    assert!(seq.is_empty());
}

#[test]
fn test_sequence_serde() {
    let mut seq = Sequence::new();
    seq.push(note("Bb3"), NoteDuration::Sixteenth);
    let json = serde_json::to_value(&seq).unwrap();
    assert_eq!(json["bpm"], 120);
    assert_eq!(json["notes"][0]["units"], 2);
    assert_eq!(json["notes"][0]["note"]["spelling"], "Bb");
}
