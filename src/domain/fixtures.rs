//! Placeholder display data for the pathway, pulse, and contributor
//! dashboards. None of this is computed; if those dashboards ever become
//! load-bearing they need a real aggregation backend.

/// A curated, ordered sequence of stories presented as a guided course.
#[derive(Debug, Clone, PartialEq)]
pub struct Pathway {
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub steps: Vec<PathwayStep>,
    /// Mock progress: how many steps the viewer has "completed".
    pub completed: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathwayStep {
    pub title: &'static str,
    pub media: MediaKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Audio,
    Article,
}

impl MediaKind {
    pub fn icon(self) -> &'static str {
        match self {
            MediaKind::Video => "🎬",
            MediaKind::Audio => "🎧",
            MediaKind::Article => "📄",
        }
    }
}

pub fn pathways() -> Vec<Pathway> {
    vec![
        Pathway {
            title: "Public Service Leadership",
            description: "Voices of leaders who turned training into change on the ground.",
            difficulty: Difficulty::Beginner,
            completed: 2,
            steps: vec![
                PathwayStep { title: "Why stories move institutions", media: MediaKind::Article },
                PathwayStep { title: "A county director's first year", media: MediaKind::Video },
                PathwayStep { title: "Listening tours that worked", media: MediaKind::Audio },
                PathwayStep { title: "From pilot to policy", media: MediaKind::Video },
            ],
        },
        Pathway {
            title: "Policy in Practice",
            description: "How written policy met day-to-day reality, told by the people involved.",
            difficulty: Difficulty::Intermediate,
            completed: 0,
            steps: vec![
                PathwayStep { title: "Reading a policy brief critically", media: MediaKind::Article },
                PathwayStep { title: "Budget hearings up close", media: MediaKind::Video },
                PathwayStep { title: "When implementation stalls", media: MediaKind::Audio },
            ],
        },
        Pathway {
            title: "Community Innovation",
            description: "Grassroots experiments and what scaled, what did not, and why.",
            difficulty: Difficulty::Advanced,
            completed: 5,
            steps: vec![
                PathwayStep { title: "Mapping a community's assets", media: MediaKind::Article },
                PathwayStep { title: "The water kiosk experiment", media: MediaKind::Video },
                PathwayStep { title: "Funding without dependency", media: MediaKind::Audio },
                PathwayStep { title: "Measuring what matters", media: MediaKind::Article },
                PathwayStep { title: "Scaling across counties", media: MediaKind::Video },
            ],
        },
    ]
}

/// A headline engagement number with its short-term direction.
#[derive(Debug, Clone, PartialEq)]
pub struct EngagementStat {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Flat => "—",
        }
    }
}

pub fn engagement_stats() -> Vec<EngagementStat> {
    vec![
        EngagementStat { label: "Stories this month", value: "38", trend: Trend::Up },
        EngagementStat { label: "Active contributors", value: "112", trend: Trend::Up },
        EngagementStat { label: "Avg. listens per story", value: "64", trend: Trend::Flat },
        EngagementStat { label: "Pending reviews", value: "7", trend: Trend::Down },
    ]
}

pub fn hot_topics() -> Vec<&'static str> {
    vec![
        "devolution",
        "water access",
        "digital services",
        "climate adaptation",
        "public health",
    ]
}

/// Region name with a relative activity level in percent.
pub fn regional_activity() -> Vec<(&'static str, u8)> {
    vec![
        ("Nairobi", 92),
        ("Mombasa", 71),
        ("Kisumu", 64),
        ("Nakuru", 55),
        ("Machakos", 41),
    ]
}

pub fn recent_activity() -> Vec<&'static str> {
    vec![
        "New story submitted in Policy in Action",
        "Transcript added to \"The water kiosk experiment\"",
        "Community Impact passed 50 published stories",
        "Three contributors joined this week",
    ]
}

/// Contributor-dashboard placeholders.
pub fn contributor_badges() -> Vec<(&'static str, &'static str)> {
    vec![
        ("First Story", "🌱"),
        ("Storyteller", "📖"),
        ("Community Voice", "📣"),
    ]
}
