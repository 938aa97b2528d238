//! Static lookup tables consumed by the analyzer, classifier, synthesizer,
//! generator and guardrails.
//!
//! Everything here is plain data. The algorithms that read these tables live
//! in their own modules, so the tables can be extended and tested on their
//! own.

use crate::models::{Category, Field};

pub const FEATURE_CAP: usize = 20;
pub const README_EXCERPT_CAP: usize = 1500;
pub const MAX_FEATURE_BULLETS: usize = 6;
/// Minimum distinct density words for a keyword-based category hint.
pub const DENSITY_THRESHOLD: usize = 2;
/// Tokens this short or shorter are dropped from feature keywords.
pub const MIN_TOKEN_LEN: usize = 3;

pub const SUBTITLE_LIMIT: usize = 30;
pub const KEYWORDS_LIMIT: usize = 100;
pub const PROMO_LIMIT: usize = 170;
pub const DESCRIPTION_LIMIT: usize = 4000;
pub const WHATS_NEW_LIMIT: usize = 4000;

/// Per-field character limits enforced with BLOCK severity.
pub const FIELD_LIMITS: [(Field, usize); 5] = [
    (Field::Subtitle, SUBTITLE_LIMIT),
    (Field::Keywords, KEYWORDS_LIMIT),
    (Field::PromotionalText, PROMO_LIMIT),
    (Field::Description, DESCRIPTION_LIMIT),
    (Field::WhatsNew, WHATS_NEW_LIMIT),
];

pub fn field_limit(field: Field) -> Option<usize> {
    FIELD_LIMITS
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, l)| *l)
}

/// URL prefixes exempt from the guardrail URL scan (platform legal/EULA).
pub const ALLOWED_URL_PREFIXES: &[&str] =
    &["https://www.apple.com/legal/", "http://www.apple.com/legal/"];

pub const EULA_URL: &str = "https://www.apple.com/legal/internet-services/itunes/dev/stdeula/";

/// Auto-renewal disclosure appended when a payment integration is present.
pub const SUBSCRIPTION_TERMS: &str = "SUBSCRIPTION TERMS\nPayment will be charged to your Apple ID account at confirmation of purchase. Subscriptions automatically renew unless canceled at least 24 hours before the end of the current period. Your account will be charged for renewal within 24 hours prior to the end of the current period. You can manage and cancel your subscriptions in your App Store account settings after purchase.\nTerms of Use: https://www.apple.com/legal/internet-services/itunes/dev/stdeula/";

/// Closing sentence; `{app}` is replaced with the display name.
pub const CALL_TO_ACTION: &str = "Download {app} today and see the difference for yourself.";

pub const SYNC_BULLET: &str = "Seamless sync across all your devices with iCloud";

/// A recognized third-party framework and what it says about the app.
pub struct Integration {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    /// Category implied directly by the integration.
    pub category: Option<Category>,
    /// Payment integrations set `has_subscription`.
    pub payment: bool,
    /// Description bullet added when the integration is present.
    pub bullet: Option<&'static str>,
}

pub static INTEGRATIONS: &[Integration] = &[
    Integration {
        name: "HealthKit",
        keywords: &["health", "fitness", "workout", "step", "activity"],
        category: Some(Category::HealthFitness),
        payment: false,
        bullet: Some("Syncs with Apple Health so all your activity lives in one place"),
    },
    Integration {
        name: "StoreKit",
        keywords: &["premium", "subscription", "pro"],
        category: None,
        payment: true,
        bullet: None,
    },
    Integration {
        name: "RevenueCat",
        keywords: &["premium", "subscription", "pro"],
        category: None,
        payment: true,
        bullet: None,
    },
    Integration {
        name: "CloudKit",
        keywords: &["sync", "backup", "icloud"],
        category: None,
        payment: false,
        bullet: Some(SYNC_BULLET),
    },
    Integration {
        name: "MapKit",
        keywords: &["map", "route", "nearby", "place"],
        category: Some(Category::Travel),
        payment: false,
        bullet: Some("Interactive maps to explore what is around you"),
    },
    Integration {
        name: "CoreLocation",
        keywords: &["location", "gps", "nearby"],
        category: None,
        payment: false,
        bullet: Some("Location-aware features tailored to where you are"),
    },
    Integration {
        name: "WeatherKit",
        keywords: &["weather", "forecast", "temperature"],
        category: Some(Category::Weather),
        payment: false,
        bullet: Some("Hyperlocal forecasts powered by live weather data"),
    },
    Integration {
        name: "GameKit",
        keywords: &["leaderboard", "achievement", "multiplayer"],
        category: Some(Category::Games),
        payment: false,
        bullet: Some("Game Center leaderboards and achievements"),
    },
    Integration {
        name: "MusicKit",
        keywords: &["music", "playlist", "song"],
        category: Some(Category::Music),
        payment: false,
        bullet: Some("Full access to your Apple Music library"),
    },
    Integration {
        name: "PhotosUI",
        keywords: &["photo", "gallery", "image"],
        category: Some(Category::Photography),
        payment: false,
        bullet: Some("Pick photos straight from your library"),
    },
    Integration {
        name: "AVFoundation",
        keywords: &["audio", "video", "camera", "recording"],
        category: None,
        payment: false,
        bullet: None,
    },
    Integration {
        name: "Charts",
        keywords: &["chart", "stats", "insight", "progress"],
        category: None,
        payment: false,
        bullet: Some("Beautiful charts that turn your data into insight"),
    },
    Integration {
        name: "WidgetKit",
        keywords: &["widget", "glance"],
        category: None,
        payment: false,
        bullet: Some("Home Screen widgets for information at a glance"),
    },
    Integration {
        name: "UserNotifications",
        keywords: &["reminder", "notification", "alert"],
        category: None,
        payment: false,
        bullet: Some("Smart reminders so nothing slips through the cracks"),
    },
    Integration {
        name: "CoreML",
        keywords: &["smart", "prediction", "intelligent"],
        category: None,
        payment: false,
        bullet: Some("On-device intelligence that learns what matters to you"),
    },
    Integration {
        name: "SwiftData",
        keywords: &["offline", "private"],
        category: None,
        payment: false,
        bullet: None,
    },
    Integration {
        name: "Firebase",
        keywords: &["cloud", "account"],
        category: None,
        payment: false,
        bullet: None,
    },
];

pub fn integration(name: &str) -> Option<&'static Integration> {
    INTEGRATIONS.iter().find(|i| i.name == name)
}

/// Category-specific copy material and signal words.
pub struct CategoryProfile {
    pub category: Category,
    /// Domain-indicative words checked against the aggregate source text.
    pub signals: &'static [&'static str],
    /// Generic keyword fallback, in priority order.
    pub keyword_pool: &'static [&'static str],
    /// Subtitle alternatives, in preference order; each fits `SUBTITLE_LIMIT`.
    pub subtitles: &'static [&'static str],
    pub hook: &'static str,
    pub audience: &'static str,
    /// Promotional text; `{app}` is replaced with the display name.
    pub promo: &'static str,
}

pub static CATEGORY_PROFILES: &[CategoryProfile] = &[
    CategoryProfile {
        category: Category::HealthFitness,
        signals: &[
            "workout", "fitness", "exercise", "calorie", "pedometer", "heartrate",
            "hydration", "training", "health", "stretching",
        ],
        keyword_pool: &[
            "workout", "fitness", "exercise", "calorie", "step", "training", "cardio",
            "strength", "wellness", "tracker", "gym", "run",
        ],
        subtitles: &[
            "Move More, Feel Stronger",
            "Your Daily Wellness Coach",
            "Train Smarter Every Day",
            "Build Healthy Habits Daily",
            "Reach Your Body Goals",
            "Stay Active and Motivated",
        ],
        hook: "Take charge of your health with one companion for every workout and every goal.",
        audience: "Perfect for beginners building a routine and athletes chasing a new personal best.",
        promo: "{app} makes every workout count. Track your progress, stay motivated and reach your goals faster than ever.",
    },
    CategoryProfile {
        category: Category::Productivity,
        signals: &[
            "todolist", "subtask", "reminder", "planner", "agenda", "pomodoro", "kanban",
            "checklist", "deadline", "notebook",
        ],
        keyword_pool: &[
            "task", "todo", "planner", "checklist", "organizer", "reminder", "schedule",
            "focus", "note", "agenda", "goal", "list",
        ],
        subtitles: &[
            "Get More Done, Stress Less",
            "Plan Your Day in Seconds",
            "Organize Work and Life",
            "Stay on Top of Everything",
            "Simple Daily Planning",
            "Your Ideas, Organized",
        ],
        hook: "Turn scattered plans into clear next steps and finish what matters most.",
        audience: "Perfect for busy professionals, students and anyone juggling more than one project.",
        promo: "Get organized with {app}. Capture ideas in seconds and keep every plan moving forward.",
    },
    CategoryProfile {
        category: Category::Finance,
        signals: &[
            "budget", "expense", "income", "invoice", "savings", "paycheck", "ledger",
            "spending", "wallet", "mortgage",
        ],
        keyword_pool: &[
            "budget", "expense", "money", "finance", "spending", "saving", "bill", "income",
            "wallet", "tracker", "cash", "bank",
        ],
        subtitles: &[
            "Take Control of Your Money",
            "Spend Smarter, Save More",
            "Know Where Every Dollar Goes",
            "Simple Personal Budgeting",
            "Plan Ahead With Confidence",
            "Your Pocket Accountant",
        ],
        hook: "See exactly where your money goes and make every dollar work harder for you.",
        audience: "Perfect for anyone saving for a goal, paying down debt or simply spending with intention.",
        promo: "{app} puts your finances in focus. Build a budget you can stick to and watch your savings grow.",
    },
    CategoryProfile {
        category: Category::Education,
        signals: &[
            "lesson", "quiz", "course", "study", "flashcard", "homework", "vocabulary",
            "classroom", "student", "curriculum",
        ],
        keyword_pool: &[
            "learn", "study", "quiz", "flashcard", "lesson", "course", "exam", "vocabulary",
            "practice", "education", "tutor", "school",
        ],
        subtitles: &[
            "Learn Something New Daily",
            "Master Any Subject Faster",
            "Smarter Studying Starts Here",
            "Bite-Sized Learning On the Go",
            "Ace Your Next Test",
            "Knowledge at Your Fingertips",
        ],
        hook: "Learning sticks when it fits your day, and this app makes every minute of study count.",
        audience: "Perfect for students, lifelong learners and anyone preparing for an important exam.",
        promo: "Study smarter with {app}. Short sessions and steady practice help you remember more.",
    },
    CategoryProfile {
        category: Category::FoodDrink,
        signals: &[
            "recipe", "ingredient", "meal", "cookbook", "restaurant", "nutrition", "grocery",
            "kitchen", "dinner", "food",
        ],
        keyword_pool: &[
            "recipe", "meal", "cooking", "food", "grocery", "kitchen", "dinner", "nutrition",
            "diet", "planner", "ingredient", "cook",
        ],
        subtitles: &[
            "Cook Something Great Tonight",
            "Delicious Ideas Every Day",
            "Plan Meals Without the Fuss",
            "Your Kitchen Companion",
            "Eat Well, Waste Less",
            "From Pantry to Plate",
        ],
        hook: "Great meals start with a good plan, and dinner has never been easier to figure out.",
        audience: "Perfect for home cooks, busy families and anyone who wants to eat better at home.",
        promo: "Find your next favorite dish with {app}. Plan meals, build grocery lists and cook with confidence.",
    },
    CategoryProfile {
        category: Category::Travel,
        signals: &[
            "roadtrip", "flight", "hotel", "itinerary", "airport", "booking", "passport",
            "travel", "sightseeing", "vacation",
        ],
        keyword_pool: &[
            "travel", "trip", "itinerary", "vacation", "flight", "hotel", "map", "journey",
            "explore", "guide", "booking", "planner",
        ],
        subtitles: &[
            "Adventures Made Effortless",
            "Plan Trips Like a Pro",
            "Your Journey, Simplified",
            "Discover Places Worth Visiting",
            "Wander With Confidence",
            "Every Detail of Every Trip",
        ],
        hook: "Spend less time planning and more time exploring, wherever the road takes you.",
        audience: "Perfect for weekend explorers, frequent flyers and families planning their next getaway.",
        promo: "Your next adventure starts with {app}. Keep every booking and plan together in one place.",
    },
    CategoryProfile {
        category: Category::Music,
        signals: &[
            "song", "playlist", "album", "artist", "chord", "melody", "music", "lyrics",
            "genre", "karaoke",
        ],
        keyword_pool: &[
            "music", "song", "playlist", "album", "artist", "audio", "lyrics", "player",
            "track", "listen", "radio", "sound",
        ],
        subtitles: &[
            "Hear More of What You Love",
            "Your Soundtrack, Anywhere",
            "Discover Your Next Favorite",
            "Every Beat at Your Fingertips",
            "Press Play on Great Days",
            "Tunes for Every Mood",
        ],
        hook: "Music sounds better when it is organized around you and ready the moment you are.",
        audience: "Perfect for playlist curators, new music hunters and anyone who never leaves home without headphones.",
        promo: "Press play on {app}. Build playlists you love and discover sounds that match your mood.",
    },
    CategoryProfile {
        category: Category::Photography,
        signals: &[
            "photo", "camera", "selfie", "video", "gallery", "collage", "exposure", "lens",
            "shutter", "crop",
        ],
        keyword_pool: &[
            "photo", "camera", "editor", "filter", "video", "gallery", "picture", "collage",
            "effect", "capture", "image", "retouch",
        ],
        subtitles: &[
            "Capture Moments Beautifully",
            "Pro Edits in a Few Taps",
            "Make Every Shot Shine",
            "Create Stunning Visuals",
            "Your Pocket Photo Studio",
            "Bring Your Memories to Life",
        ],
        hook: "Every great shot deserves a finishing touch, and yours are only a few taps away.",
        audience: "Perfect for creators, casual snappers and anyone who wants their photos to stand out.",
        promo: "Make every photo shine with {app}. Powerful tools, simple controls and results worth sharing.",
    },
    CategoryProfile {
        category: Category::Social,
        signals: &[
            "friend", "chat", "follower", "hashtag", "newsfeed", "meetup", "inbox",
            "groupchat", "community", "dating",
        ],
        keyword_pool: &[
            "social", "chat", "friend", "message", "community", "share", "group", "connect",
            "meet", "network", "post", "feed",
        ],
        subtitles: &[
            "Stay Close to Your People",
            "Conversations That Matter",
            "Share Moments With Friends",
            "Find Your Community",
            "Connect Beyond the Feed",
            "Where Good Talks Happen",
        ],
        hook: "Stay connected to the people who matter and the conversations you care about.",
        audience: "Perfect for close friends, growing communities and anyone who loves to share.",
        promo: "Bring your people together with {app}. Share moments, start conversations and never miss an update.",
    },
    CategoryProfile {
        category: Category::Lifestyle,
        signals: &[
            "habit", "journal", "mood", "diary", "goal", "routine", "mindfulness",
            "gratitude", "reflection", "streak",
        ],
        keyword_pool: &[
            "habit", "journal", "mood", "diary", "routine", "mindfulness", "gratitude",
            "selfcare", "streak", "reflection", "wellbeing", "motivation",
        ],
        subtitles: &[
            "Small Steps, Big Changes",
            "Design Your Best Routine",
            "A Calmer, Happier You",
            "Reflect, Grow, Repeat",
            "Make Every Day Count",
            "Your Daily Reset Button",
        ],
        hook: "Build the life you want one small, consistent step at a time.",
        audience: "Perfect for anyone building better habits, keeping a journal or looking for a calmer routine.",
        promo: "Grow a little every day with {app}. Track habits, reflect on your progress and celebrate every streak.",
    },
    CategoryProfile {
        category: Category::Weather,
        signals: &[
            "forecast", "temperature", "rainfall", "humidity", "windspeed", "weather", "storm",
            "precipitation", "celsius", "fahrenheit",
        ],
        keyword_pool: &[
            "weather", "forecast", "rain", "radar", "temperature", "storm", "wind", "alert",
            "climate", "sun", "snow", "hourly",
        ],
        subtitles: &[
            "Know Before You Go",
            "Hyperlocal Skies, Always",
            "Plan Around Every Cloud",
            "Never Get Caught Out",
            "Accurate Outlooks Daily",
            "Skies Made Simple",
        ],
        hook: "Know what the sky has planned before you step outside.",
        audience: "Perfect for commuters, outdoor lovers and anyone planning around the weather.",
        promo: "Stay one step ahead of the weather with {app}. Clear forecasts and timely alerts wherever you are.",
    },
    CategoryProfile {
        category: Category::Games,
        signals: &[
            "gameplay", "scoreboard", "multiplayer", "game", "puzzle", "leaderboard",
            "achievement", "enemy", "spawn", "highscore",
        ],
        keyword_pool: &[
            "game", "puzzle", "arcade", "casual", "brain", "challenge", "level", "score",
            "fun", "offline", "leaderboard", "play",
        ],
        subtitles: &[
            "Addictively Fun Challenges",
            "One More Round, Promise",
            "Test Your Skills Today",
            "Play Anytime, Anywhere",
            "Beat Your High Score",
            "Quick Fun for Busy Days",
        ],
        hook: "Easy to pick up and impossible to put down, every round brings a new challenge.",
        audience: "Perfect for quick breaks, long commutes and players who love to chase a high score.",
        promo: "Ready for a challenge? {app} delivers quick rounds, clever twists and a reason to play just one more time.",
    },
];

pub static FALLBACK_PROFILE: CategoryProfile = CategoryProfile {
    category: Category::Utilities,
    signals: &[],
    keyword_pool: &[
        "utility", "tool", "simple", "fast", "offline", "private", "widget", "organize",
        "smart", "daily",
    ],
    subtitles: &[
        "Simple Tools, Smart Results",
        "Everything You Need, Faster",
        "Built for Everyday Life",
        "Do More With Less Effort",
        "Fast, Private and Reliable",
        "Your Everyday Essential",
    ],
    hook: "A focused, fast app that does exactly what you need and nothing you do not.",
    audience: "Perfect for anyone who values simple tools that just work.",
    promo: "{app} keeps things simple. Fast, focused and ready whenever you need it.",
};

/// Profile for a category; the fallback profile for anything without one.
pub fn profile(category: Category) -> &'static CategoryProfile {
    CATEGORY_PROFILES
        .iter()
        .find(|p| p.category == category)
        .unwrap_or(&FALLBACK_PROFILE)
}

/// Structural and generic code terms that say nothing about the product.
pub const STRUCTURAL_STOP_WORDS: &[&str] = &[
    "view", "views", "manager", "delegate", "controller", "model", "service", "store",
    "helper", "provider", "coordinator", "cell", "row", "screen", "item", "detail",
    "data", "state", "handler", "add", "remove", "update", "delete", "edit", "create",
    "get", "set", "fetch", "load", "save", "show", "main", "app", "content", "sheet",
    "button", "custom", "base", "default", "shared", "util", "utils", "protocol",
    "type", "impl", "config", "root", "container", "wrapper", "factory", "repository",
    "object", "entry", "picker", "modifier", "preview", "navigation", "tab", "text",
];

/// Common English words with no search value.
pub const GENERAL_STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "your", "you", "from", "this", "that", "into", "all",
    "are", "our", "not", "but", "its", "can", "will", "has", "have", "more", "about",
    "over", "just", "than", "then", "what", "when", "where", "which", "who", "how",
    "new", "now", "one", "out", "any", "each", "every", "get", "was", "were", "been",
    "also", "very", "most", "some", "here", "there", "they", "them", "their",
];

/// Plural-looking words that must not lose their trailing "s".
pub const SINGULAR_EXCEPTIONS: &[&str] = &[
    "analysis", "news", "series", "species", "canvas", "ios", "macos", "watchos", "tvos",
    "ipados", "always", "perhaps", "sometimes", "physics", "mathematics", "atlas", "lens",
    "bias", "gas", "plus", "yes", "stats",
];
