//! Static copy for the landing page.

pub const SITE_NAME: &str = "Polyglot";

pub const INTRO_VIDEO_URL: &str = "https://www.youtube-nocookie.com/embed/2xbT1Y0o3qY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "About", section: "about" },
    NavItem { label: "Courses", section: "courses" },
    NavItem { label: "Results", section: "stats" },
    NavItem { label: "Pricing", section: "subscribe" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    pub slug: &'static str,
    pub language: &'static str,
    pub title: &'static str,
    pub level: Level,
    pub lessons: u16,
    pub blurb: &'static str,
    pub image: &'static str,
}

pub const COURSES: &[Course] = &[
    Course {
        slug: "spanish-essentials",
        language: "Spanish",
        title: "Spanish Essentials",
        level: Level::Beginner,
        lessons: 40,
        blurb: "Greetings, travel phrases and everyday conversation in twelve weeks.",
        image: "/assets/courses/spanish.webp",
    },
    Course {
        slug: "french-conversation",
        language: "French",
        title: "French Conversation",
        level: Level::Intermediate,
        lessons: 36,
        blurb: "Speak with confidence at the café, the office and the dinner table.",
        image: "/assets/courses/french.webp",
    },
    Course {
        slug: "japanese-kana",
        language: "Japanese",
        title: "Japanese from Kana",
        level: Level::Beginner,
        lessons: 48,
        blurb: "Read hiragana and katakana, then build your first sentences.",
        image: "/assets/courses/japanese.webp",
    },
    Course {
        slug: "german-grammar",
        language: "German",
        title: "German Grammar Deep Dive",
        level: Level::Advanced,
        lessons: 30,
        blurb: "Cases, word order and the subjunctive without the headache.",
        image: "/assets/courses/german.webp",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "120k+", label: "Active learners" },
    Stat { value: "18", label: "Languages" },
    Stat { value: "4.8/5", label: "Average rating" },
    Stat { value: "15 min", label: "Daily lesson" },
];
