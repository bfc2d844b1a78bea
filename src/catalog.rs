use rand::prelude::*;

/// A candidate blog subject with its target SEO keyword and media category.
#[derive(Debug, Clone)]
pub struct TopicSpec {
    pub topic: String,
    pub keyword: String,
    pub category: String,
}

impl TopicSpec {
    /// Topic supplied on the command line. The keyword falls back to the topic
    /// itself and media come from the general pool.
    pub fn custom(topic: &str) -> Self {
        TopicSpec {
            topic: topic.trim().to_string(),
            keyword: topic.trim().to_lowercase(),
            category: "general".to_string(),
        }
    }
}

const TOPICS: &[(&str, &str, &str)] = &[
    ("Simple morning stretches for better mobility after 50", "morning stretches seniors", "movement"),
    ("How to build a medication routine that actually sticks", "medication routine tips", "medication"),
    ("Understanding your blood pressure numbers", "blood pressure explained", "heart"),
    ("5 brain exercises to keep your mind sharp", "brain exercises seniors", "mind"),
    ("The importance of staying hydrated as we age", "hydration tips elderly", "nutrition"),
    ("How to prevent falls at home", "fall prevention seniors", "safety"),
    ("Managing stress through simple breathing exercises", "breathing exercises stress", "mind"),
    ("Building stronger connections with family through technology", "seniors technology family", "social"),
    ("Heart-healthy recipes that are easy to make", "heart healthy recipes seniors", "nutrition"),
    ("Sleep tips for a more restful night", "sleep tips older adults", "sleep"),
    ("Walking for health: Getting started safely", "walking exercise seniors", "movement"),
    ("Understanding common medication side effects", "medication side effects", "medication"),
    ("Simple mindfulness practices for everyday calm", "mindfulness seniors", "mind"),
    ("Staying social: Why connection matters for health", "social connection elderly", "social"),
    ("Managing chronic pain naturally", "chronic pain management seniors", "movement"),
];

pub const FREE_FEATURES: &[&str] = &[
    "Emergency SOS button",
    "Fall Detection",
    "Trusted Contacts management",
    "Basic medication reminders (up to 5)",
];

pub const PREMIUM_FEATURES: &[&str] = &[
    "Unlimited medication tracking",
    "Apple Health integration",
    "Food and water logging",
    "Mind Breaks games",
    "Calendar sync",
    "Magnifier tool",
];

#[derive(Debug, Clone, Copy)]
pub struct ImageAsset {
    pub url: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct VideoAsset {
    pub embed_url: &'static str,
    pub caption: &'static str,
}

const MOVEMENT_IMAGES: &[ImageAsset] = &[
    ImageAsset {
        url: "/assets/blog/morning-stretch.jpg",
        alt: "An older woman stretching on a yoga mat at home",
        caption: "A few gentle minutes each morning keep joints moving freely.",
    },
    ImageAsset {
        url: "/assets/blog/park-walk.jpg",
        alt: "A couple walking along a tree-lined park path",
        caption: "Walking is one of the safest ways to stay active at any age.",
    },
];

const MEDICATION_IMAGES: &[ImageAsset] = &[
    ImageAsset {
        url: "/assets/blog/pill-organizer.jpg",
        alt: "A weekly pill organizer next to a glass of water",
        caption: "A simple organizer turns a complicated schedule into a routine.",
    },
    ImageAsset {
        url: "/assets/blog/pharmacist-talk.jpg",
        alt: "A pharmacist explaining a prescription label to a customer",
        caption: "Your pharmacist is a great first stop for medication questions.",
    },
];

const HEART_IMAGES: &[ImageAsset] = &[
    ImageAsset {
        url: "/assets/blog/blood-pressure-check.jpg",
        alt: "A home blood pressure monitor on a kitchen table",
        caption: "Checking at the same time each day gives the most useful numbers.",
    },
    ImageAsset {
        url: "/assets/blog/heart-rate-watch.jpg",
        alt: "A wrist monitor showing a resting heart rate",
        caption: "Small daily readings reveal trends a single checkup can miss.",
    },
];

const MIND_IMAGES: &[ImageAsset] = &[
    ImageAsset {
        url: "/assets/blog/crossword.jpg",
        alt: "Hands filling in a crossword puzzle with a pencil",
        caption: "Puzzles give your brain the same kind of workout walking gives your legs.",
    },
    ImageAsset {
        url: "/assets/blog/quiet-breathing.jpg",
        alt: "A man sitting in a sunlit chair with his eyes closed",
        caption: "Two quiet minutes of slow breathing can reset a stressful day.",
    },
];

const NUTRITION_IMAGES: &[ImageAsset] = &[
    ImageAsset {
        url: "/assets/blog/water-glass.jpg",
        alt: "A glass of water with lemon slices on a counter",
        caption: "Thirst fades with age; a visible glass is the best reminder.",
    },
    ImageAsset {
        url: "/assets/blog/vegetable-prep.jpg",
        alt: "Fresh vegetables being chopped on a wooden board",
        caption: "Simple ingredients make the most reliable heart-healthy meals.",
    },
];

const SAFETY_IMAGES: &[ImageAsset] = &[
    ImageAsset {
        url: "/assets/blog/grab-bar.jpg",
        alt: "A grab bar installed beside a walk-in shower",
        caption: "Bathrooms cause the most falls at home; a grab bar changes that.",
    },
    ImageAsset {
        url: "/assets/blog/clear-hallway.jpg",
        alt: "A well-lit hallway free of rugs and clutter",
        caption: "Clear, well-lit walkways are the cheapest fall prevention there is.",
    },
];

const SOCIAL_IMAGES: &[ImageAsset] = &[
    ImageAsset {
        url: "/assets/blog/video-call.jpg",
        alt: "A grandmother on a video call with her grandchildren",
        caption: "A weekly video call keeps family close no matter the distance.",
    },
    ImageAsset {
        url: "/assets/blog/coffee-friends.jpg",
        alt: "Three friends laughing over coffee at a cafe table",
        caption: "Regular time with friends is as protective as most medications.",
    },
];

const SLEEP_IMAGES: &[ImageAsset] = &[
    ImageAsset {
        url: "/assets/blog/bedside-lamp.jpg",
        alt: "A dim bedside lamp next to a book and reading glasses",
        caption: "A consistent wind-down routine tells your body the day is done.",
    },
];

const GENERAL_IMAGES: &[ImageAsset] = &[
    ImageAsset {
        url: "/assets/blog/morning-tea.jpg",
        alt: "A cup of tea on a table in morning light",
        caption: "Small daily habits add up to steadier days.",
    },
    ImageAsset {
        url: "/assets/blog/journal-notes.jpg",
        alt: "A notebook and pen beside a pair of reading glasses",
        caption: "Writing things down is the simplest memory aid ever invented.",
    },
];

const MOVEMENT_VIDEOS: &[VideoAsset] = &[VideoAsset {
    embed_url: "https://www.youtube.com/embed/8BcPHWGQO44",
    caption: "A 10-minute seated stretching routine you can follow along with.",
}];

const MIND_VIDEOS: &[VideoAsset] = &[VideoAsset {
    embed_url: "https://www.youtube.com/embed/inpok4MKVLM",
    caption: "A short guided breathing exercise for instant calm.",
}];

const GENERAL_VIDEOS: &[VideoAsset] = &[VideoAsset {
    embed_url: "https://www.youtube.com/embed/Ks-_Mh1QhMc",
    caption: "Why small daily habits matter more than big resolutions.",
}];

/// Image pool for a category, falling back to the general pool.
pub fn images_for(category: &str) -> &'static [ImageAsset] {
    match category {
        "movement" => MOVEMENT_IMAGES,
        "medication" => MEDICATION_IMAGES,
        "heart" => HEART_IMAGES,
        "mind" => MIND_IMAGES,
        "nutrition" => NUTRITION_IMAGES,
        "safety" => SAFETY_IMAGES,
        "social" => SOCIAL_IMAGES,
        "sleep" => SLEEP_IMAGES,
        _ => GENERAL_IMAGES,
    }
}

pub fn videos_for(category: &str) -> &'static [VideoAsset] {
    match category {
        "movement" => MOVEMENT_VIDEOS,
        "mind" => MIND_VIDEOS,
        _ => GENERAL_VIDEOS,
    }
}

pub fn random_topic() -> TopicSpec {
    let (topic, keyword, category) = TOPICS
        .choose(&mut rand::rng())
        .expect("topic catalog is never empty");
    TopicSpec {
        topic: (*topic).to_string(),
        keyword: (*keyword).to_string(),
        category: (*category).to_string(),
    }
}

/// One free and one premium app feature to weave into the post.
pub fn random_features() -> (&'static str, &'static str) {
    let mut rng = rand::rng();
    let free = *FREE_FEATURES.choose(&mut rng).expect("free feature list is never empty");
    let premium = *PREMIUM_FEATURES
        .choose(&mut rng)
        .expect("premium feature list is never empty");
    (free, premium)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_category_has_images() {
        for &(_, _, category) in TOPICS {
            assert!(!images_for(category).is_empty(), "no images for {category}");
            assert!(!videos_for(category).is_empty(), "no videos for {category}");
        }
    }

    #[test]
    fn unknown_category_falls_back_to_general() {
        assert_eq!(images_for("gardening").len(), GENERAL_IMAGES.len());
    }

    #[test]
    fn custom_topic_lowercases_keyword() {
        let t = TopicSpec::custom("  Better Balance After 60 ");
        assert_eq!(t.topic, "Better Balance After 60");
        assert_eq!(t.keyword, "better balance after 60");
        assert_eq!(t.category, "general");
    }
}
