//! State for the "Watch Demo" catalogue dialog.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoVideo {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
}

pub const DEMO_VIDEOS: &[DemoVideo] = &[
    DemoVideo {
        id: "ai-prediction",
        icon: "🧠",
        title: "AI Donor Prediction",
        description: "See how our AI predicts donor availability with 95% accuracy",
        duration: "3:45",
    },
    DemoVideo {
        id: "smart-matching",
        icon: "👥",
        title: "Smart Patient Matching",
        description: "Watch real-time matching between patients and donors",
        duration: "2:30",
    },
    DemoVideo {
        id: "engagement",
        icon: "⚡",
        title: "Donor Engagement System",
        description: "Explore gamification and automated notifications",
        duration: "4:15",
    },
];

/// Which video, if any, is in the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemoCatalog {
    current: Option<&'static DemoVideo>,
}

impl DemoCatalog {
    pub fn current(&self) -> Option<&'static DemoVideo> {
        self.current
    }

    /// Unknown ids leave the catalogue as it is.
    pub fn select(&mut self, id: &str) {
        if let Some(video) = DEMO_VIDEOS.iter().find(|v| v.id == id) {
            self.current = Some(video);
        }
    }

    pub fn back(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_and_back() {
        let mut catalog = DemoCatalog::default();
        assert!(catalog.current().is_none());

        catalog.select("smart-matching");
        assert_eq!(catalog.current().map(|v| v.title), Some("Smart Patient Matching"));

        catalog.select("nope");
        assert_eq!(catalog.current().map(|v| v.id), Some("smart-matching"));

        catalog.back();
        assert_eq!(catalog, DemoCatalog::default());
    }

    #[test]
    fn video_ids_are_unique() {
        for (i, a) in DEMO_VIDEOS.iter().enumerate() {
            for b in &DEMO_VIDEOS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
