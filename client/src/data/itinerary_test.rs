use super::*;

#[test]
fn itinerary_keeps_source_order() {
    let titles = ITINERARY.iter().map(|e| e.title).collect::<Vec<_>>();
    assert_eq!(
        titles,
        vec!["Lunch", "Dance", "Activity #1", "Yuhiro Sushi", "just a tini bit older + galentini"]
    );
}

#[test]
fn itinerary_entries_have_time_and_title() {
    for entry in ITINERARY {
        assert!(!entry.time.trim().is_empty());
        assert!(!entry.title.trim().is_empty());
    }
}

#[test]
fn from_key_maps_every_documented_key() {
    for icon in IconKey::ALL {
        assert_eq!(IconKey::from_key(icon.key()), icon);
    }
}

#[test]
fn from_key_unknown_falls_back_to_heart() {
    assert_eq!(IconKey::from_key("balloon"), IconKey::Heart);
    assert_eq!(IconKey::from_key(""), IconKey::Heart);
    assert_eq!(IconKey::from_key("Coffee"), IconKey::Heart);
    assert_eq!(IconKey::default(), IconKey::Heart);
}

#[test]
fn entry_icon_key_resolves_through_from_key() {
    let entry = ItineraryEntry { time: "noon", title: "Picnic", description: "", icon: "kite" };
    assert_eq!(entry.icon_key(), IconKey::Heart);
    assert_eq!(entry.icon_key().glyph(), IconKey::Heart.glyph());
    assert_eq!(ITINERARY[0].icon_key(), IconKey::Coffee);
}

#[test]
fn glyphs_are_distinct() {
    let mut glyphs = IconKey::ALL.iter().map(|icon| icon.glyph()).collect::<Vec<_>>();
    glyphs.sort_unstable();
    glyphs.dedup();
    assert_eq!(glyphs.len(), IconKey::ALL.len());
}
