//! Copy for the landing-page sections.

/// Accent used for an icon tile. Maps to a `tone-*` class in styles.css.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Blue,
    Green,
    Yellow,
    Purple,
    Indigo,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Primary => "tone-primary",
            Tone::Blue => "tone-blue",
            Tone::Green => "tone-green",
            Tone::Yellow => "tone-yellow",
            Tone::Purple => "tone-purple",
            Tone::Indigo => "tone-indigo",
        }
    }
}

pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
    pub tone: Tone,
}

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat {
        value: "45s",
        label: "Donation Interval",
        tone: Tone::Primary,
    },
    HeroStat {
        value: "2035",
        label: "Thalassemia-Free Goal",
        tone: Tone::Blue,
    },
    HeroStat {
        value: "95%",
        label: "Match Accuracy",
        tone: Tone::Green,
    },
    HeroStat {
        value: "24/7",
        label: "AI Assistant",
        tone: Tone::Primary,
    },
];

pub const HERO_PILLS: &[(&str, &str, Tone)] = &[
    ("🧠", "AI Prediction", Tone::Primary),
    ("👥", "Smart Matching", Tone::Blue),
    ("🛡", "Privacy First", Tone::Green),
];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub badge: &'static str,
    pub tone: Tone,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🧠",
        title: "AI Prediction Engine",
        description: "Machine learning models predict donor availability based on donation cycles, behavior patterns, and health data.",
        badge: "Smart",
        tone: Tone::Primary,
    },
    Feature {
        icon: "🎯",
        title: "Smart Matching",
        description: "Intelligent algorithm matches patients with optimal nearby donors using blood type, location, and availability.",
        badge: "Precise",
        tone: Tone::Blue,
    },
    Feature {
        icon: "🤖",
        title: "Multilingual AI Assistant",
        description: "24/7 conversational AI in Hindi and English to answer questions and guide both donors and patients.",
        badge: "Helpful",
        tone: Tone::Green,
    },
    Feature {
        icon: "🏆",
        title: "Gamification System",
        description: "Badges, streaks, and milestones encourage recurring donations and build a community of regular donors.",
        badge: "Engaging",
        tone: Tone::Yellow,
    },
    Feature {
        icon: "💬",
        title: "Smart Notifications",
        description: "Personalized WhatsApp and SMS reminders when donors become eligible, with birthday wishes and motivation.",
        badge: "Personal",
        tone: Tone::Purple,
    },
    Feature {
        icon: "🌐",
        title: "e-RaktKosh Integration",
        description: "Seamlessly integrates with government systems and Blood Warriors' Blood Bridge for real-time sync.",
        badge: "Connected",
        tone: Tone::Indigo,
    },
];

pub struct StatCard {
    pub icon: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

pub const FEATURE_STATS: &[StatCard] = &[
    StatCard {
        icon: "⏱",
        value: "2x Faster",
        description: "Patient-donor matching speed",
        tone: Tone::Primary,
    },
    StatCard {
        icon: "❤",
        value: "85%",
        description: "Donor retention rate improvement",
        tone: Tone::Blue,
    },
    StatCard {
        icon: "🛡",
        value: "100%",
        description: "HIPAA compliant security",
        tone: Tone::Green,
    },
    StatCard {
        icon: "⚡",
        value: "Real-time",
        description: "Emergency response system",
        tone: Tone::Yellow,
    },
];

pub struct ProcessStep {
    pub number: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub tone: Tone,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        number: "01",
        icon: "🗄",
        title: "Data Collection & Analysis",
        description: "AI collects and analyzes donor patterns, health records, and behavioral data to build comprehensive donor profiles.",
        details: &[
            "Past donation cycles tracking",
            "Location and mobility patterns",
            "Health eligibility windows",
            "Response rate analytics",
        ],
        tone: Tone::Primary,
    },
    ProcessStep {
        number: "02",
        icon: "🧠",
        title: "Predictive Intelligence",
        description: "Machine learning algorithms predict when donors will be available and likely to respond to donation requests.",
        details: &[
            "Availability forecasting",
            "Response probability scoring",
            "Optimal timing predictions",
            "Health status monitoring",
        ],
        tone: Tone::Blue,
    },
    ProcessStep {
        number: "03",
        icon: "👥",
        title: "Smart Matching Engine",
        description: "Intelligent system matches patients with the best available donors based on multiple compatibility factors.",
        details: &[
            "Blood type compatibility",
            "Geographic proximity",
            "Availability windows",
            "Historical reliability",
        ],
        tone: Tone::Green,
    },
    ProcessStep {
        number: "04",
        icon: "💬",
        title: "Engagement & Follow-up",
        description: "Personalized communication and gamification keep donors engaged and motivated for recurring donations.",
        details: &[
            "WhatsApp/SMS notifications",
            "Gamification rewards",
            "Progress tracking",
            "Community building",
        ],
        tone: Tone::Purple,
    },
];

pub const EMERGENCY_WORKFLOW: &[&str] = &[
    "Emergency blood request received",
    "AI identifies optimal donors instantly",
    "Personalized notifications sent",
    "Real-time coordination with donors",
    "Successful donation completed",
    "Follow-up and appreciation sent",
];

pub struct Metric {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

pub const IMPACT_METRICS: &[Metric] = &[
    Metric {
        icon: "👥",
        value: "10,000+",
        label: "Lives Saved Annually",
        description: "Projected impact with full deployment",
        tone: Tone::Primary,
    },
    Metric {
        icon: "⏱",
        value: "75%",
        label: "Faster Response Time",
        description: "Compared to traditional methods",
        tone: Tone::Blue,
    },
    Metric {
        icon: "📈",
        value: "3x",
        label: "Donor Retention Rate",
        description: "Through gamification & engagement",
        tone: Tone::Green,
    },
    Metric {
        icon: "🎯",
        value: "95%",
        label: "Match Accuracy",
        description: "AI-powered compatibility scoring",
        tone: Tone::Purple,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    InProgress,
    Certified,
    Live,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::InProgress => "In Progress",
            Status::Certified => "Certified",
            Status::Live => "Live",
        }
    }

    /// Finished work gets the filled badge; anything still underway is muted.
    pub fn badge_class(self) -> &'static str {
        match self {
            Status::Active | Status::Certified | Status::Live => "badge badge-default",
            Status::InProgress => "badge badge-secondary",
        }
    }
}

pub struct Achievement {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub status: Status,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        icon: "🏅",
        title: "Blood Warriors Partnership",
        description: "Aligned with the mission to eliminate Thalassemia by 2035",
        status: Status::Active,
    },
    Achievement {
        icon: "🌐",
        title: "e-RaktKosh Integration",
        description: "Seamless connection with government blood bank network",
        status: Status::InProgress,
    },
    Achievement {
        icon: "🛡",
        title: "HIPAA Compliance",
        description: "Full healthcare data protection and privacy standards",
        status: Status::Certified,
    },
    Achievement {
        icon: "📅",
        title: "24/7 Availability",
        description: "Round-the-clock AI monitoring and emergency response",
        status: Status::Live,
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "BloodLink AI has revolutionized how we manage blood donations. We can now predict donor availability with 95% accuracy.",
        author: "Dr. Sarah Patel",
        role: "Hematologist, Apollo Hospital",
        avatar: "👩‍⚕️",
    },
    Testimonial {
        quote: "The gamification features have increased our regular donor base by 300%. Donors love the engagement and recognition.",
        author: "Raj Kumar",
        role: "Blood Bank Manager, AIIMS",
        avatar: "👨‍💼",
    },
    Testimonial {
        quote: "For Thalassemia patients like my daughter, this platform means peace of mind. We know blood will be available when needed.",
        author: "Priya Sharma",
        role: "Parent & Patient Advocate",
        avatar: "👩‍👧",
    },
];

/// Anchor targets shared by the header and footer.
pub const SECTION_LINKS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#how-it-works", "How It Works"),
    ("#impact", "Impact"),
    ("#contact", "Contact"),
];

pub const RESOURCE_LINKS: &[&str] = &[
    "Case Studies",
    "Research Papers",
    "White Papers",
    "Blog",
    "Help Center",
];
