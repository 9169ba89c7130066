//! Itinerary entries shown on the `/itinerary` timeline.
//!
//! Edit `ITINERARY` to change the schedule. Entries render in array order.
//! Available icon keys: `utensils`, `film`, `music`, `gift`, `coffee`,
//! `star`, `heart`, `mappin`. Anything else renders the heart glyph.

#[cfg(test)]
#[path = "itinerary_test.rs"]
mod itinerary_test;

/// One scheduled activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItineraryEntry {
    pub time: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl ItineraryEntry {
    /// Resolve the entry's icon key, falling back to the heart glyph.
    #[must_use]
    pub fn icon_key(&self) -> IconKey {
        IconKey::from_key(self.icon)
    }
}

pub const ITINERARY: &[ItineraryEntry] = &[
    ItineraryEntry {
        time: "1:00 PM",
        title: "Lunch",
        description: "Who knows what we'll eat but I hope it's good though",
        icon: "coffee",
    },
    ItineraryEntry {
        time: "2:00 PM",
        title: "Dance",
        description: "Live Love Laugh to our Pan Asian obligations",
        icon: "music",
    },
    ItineraryEntry {
        time: "6:00 PM",
        title: "Activity #1",
        description: "This is a mystery, but it will be fun, here is a hint: crafts",
        icon: "gift",
    },
    ItineraryEntry {
        time: "9:30 PM",
        title: "Yuhiro Sushi",
        description: "Valentine's special omakase course",
        icon: "utensils",
    },
    ItineraryEntry {
        time: "11:39 PM",
        title: "just a tini bit older + galentini",
        description: "Kat's celebration of growing older and galentines",
        icon: "star",
    },
];

/// Decorative glyph selector for timeline nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IconKey {
    Utensils,
    Film,
    Music,
    Gift,
    Coffee,
    Star,
    #[default]
    Heart,
    MapPin,
}

impl IconKey {
    pub const ALL: [IconKey; 8] = [
        IconKey::Utensils,
        IconKey::Film,
        IconKey::Music,
        IconKey::Gift,
        IconKey::Coffee,
        IconKey::Star,
        IconKey::Heart,
        IconKey::MapPin,
    ];

    /// Map a data key to an icon. Unknown keys yield [`IconKey::Heart`].
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "utensils" => Self::Utensils,
            "film" => Self::Film,
            "music" => Self::Music,
            "gift" => Self::Gift,
            "coffee" => Self::Coffee,
            "star" => Self::Star,
            "mappin" => Self::MapPin,
            _ => Self::Heart,
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Utensils => "utensils",
            Self::Film => "film",
            Self::Music => "music",
            Self::Gift => "gift",
            Self::Coffee => "coffee",
            Self::Star => "star",
            Self::Heart => "heart",
            Self::MapPin => "mappin",
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Utensils => "🍴",
            Self::Film => "🎬",
            Self::Music => "🎵",
            Self::Gift => "🎁",
            Self::Coffee => "☕",
            Self::Star => "⭐",
            Self::Heart => "❤",
            Self::MapPin => "📍",
        }
    }
}
