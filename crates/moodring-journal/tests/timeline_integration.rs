#![forbid(unsafe_code)]

//! End-to-end: entries payload on disk → ordered timeline and profile.

use std::io::Write;

use moodring_journal::{MoodProfile, Order, load_entries, render_row, render_timeline, sort_entries};
use moodring_style::{GradientDirection, GradientStop, Influence, LinearGradient, MoodLabel, mix};
use pretty_assertions::assert_eq;
use tracing::Level;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(Level::DEBUG)
        .try_init();
}

const PAYLOAD: &str = r#"[
    {"id": 11, "title": "Gym", "content": "New record!", "mood": "angry", "created_at": "2024-06-03 18:30:00"},
    {"id": 10, "title": "Rain", "content": "Stayed in.", "mood": "sad", "created_at": "2024-06-02 07:00:00"},
    {"id": 12, "title": "Picnic", "content": "Sun at last.", "mood": "happy", "created_at": "2024-06-01T12:00:00.250"}
]"#;

fn write_payload() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PAYLOAD.as_bytes()).unwrap();
    file
}

#[test]
fn happy_sad_angry_ribbon() {
    init_tracing();
    let file = write_payload();
    let mut entries = load_entries(file.path()).unwrap();
    sort_entries(&mut entries, Order::OldestFirst);

    let rows = render_timeline(&entries);
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![12, 10, 11]);

    let happy = MoodLabel::Happy.colors();
    let sad = MoodLabel::Sad.colors();
    let angry = MoodLabel::Angry.colors();

    // first row: own primary on top, fading into sad below
    let first = &rows[0];
    assert_eq!(first.gradient.direction(), GradientDirection::ToBottom);
    assert_eq!(first.gradient.start_color(), happy.primary);
    assert_eq!(first.gradient.end_color(), mix(happy.secondary, sad.primary, 0.7));

    // middle row: pulled toward happy above and angry below
    let middle = first_and_last_stops(&rows[1].gradient);
    assert_eq!(middle.0.influence, Influence::Previous(0.7));
    assert_eq!(middle.0.color, mix(sad.primary, happy.secondary, 0.7));
    assert_eq!(middle.1.influence, Influence::Next(0.7));
    assert_eq!(middle.1.color, mix(sad.secondary, angry.primary, 0.7));
    assert_eq!(rows[1].gradient.color_at_stop(50), Some(sad.secondary));

    // last row: ends on its own secondary
    assert_eq!(rows[2].gradient.end_color(), angry.secondary);
    assert_eq!(rows[2].glyph, "😠");
}

fn first_and_last_stops(gradient: &LinearGradient) -> (GradientStop, GradientStop) {
    let stops = gradient.stops();
    (stops[0], stops[stops.len() - 1])
}

#[test]
fn newest_first_reverses_the_ribbon() {
    init_tracing();
    let file = write_payload();
    let mut entries = load_entries(file.path()).unwrap();
    sort_entries(&mut entries, Order::NewestFirst);

    let rows = render_timeline(&entries);
    assert_eq!(rows[0].id, 11);
    assert_eq!(rows[0].gradient.start_color(), MoodLabel::Angry.colors().primary);
    assert_eq!(render_row(&entries, 2).unwrap(), rows[2]);
}

#[test]
fn profile_over_payload() {
    init_tracing();
    let file = write_payload();
    let entries = load_entries(file.path()).unwrap();
    let profile = MoodProfile::from_entries(&entries);

    assert_eq!(profile.entry_count, 3);
    // one of each; priority decides
    assert_eq!(profile.dominant_mood, MoodLabel::Happy);
    assert_eq!(profile.secondary_mood, Some(MoodLabel::Sad));
    assert_eq!(profile.combined_mood, "happy, sad, angry");
}

#[test]
fn rows_render_as_json() {
    init_tracing();
    let file = write_payload();
    let entries = load_entries(file.path()).unwrap();
    let json = serde_json::to_value(render_timeline(&entries)).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2]["created_at"], "2024-06-01 12:00:00");
    assert_eq!(rows[0]["gradient"]["direction"], "to_bottom");
}
