//! Static page content shared by the server render and hydration.

use crate::state::projects::Category;

pub struct NavLink {
    /// Target section id, without the `#`.
    pub target: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { target: "home", label: "Home" },
    NavLink { target: "about", label: "About" },
    NavLink { target: "projects", label: "Projects" },
    NavLink { target: "contact", label: "Contact" },
];

pub struct Stat {
    pub id: &'static str,
    pub label: &'static str,
    pub target: u32,
    pub suffix: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { id: "stat-projects", label: "Projects shipped", target: 48, suffix: "+" },
    Stat { id: "stat-clients", label: "Happy clients", target: 32, suffix: "" },
    Stat { id: "stat-years", label: "Years of experience", target: 7, suffix: "" },
    Stat { id: "stat-commits", label: "Commits this year", target: 1250, suffix: "+" },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Storefront Platform",
        description: "Headless commerce site with server rendering and instant search.",
        category: Category::Web,
        tags: &["Rust", "Leptos", "Postgres"],
    },
    Project {
        title: "Trail Companion",
        description: "Offline-first hiking app with route recording and elevation charts.",
        category: Category::Mobile,
        tags: &["Kotlin", "Swift", "SQLite"],
    },
    Project {
        title: "Brand Refresh",
        description: "Identity system, type scale, and component library for a fintech.",
        category: Category::Design,
        tags: &["Figma", "Design Tokens"],
    },
    Project {
        title: "Realtime Dashboard",
        description: "Live operations dashboard streaming metrics over WebSockets.",
        category: Category::Web,
        tags: &["TypeScript", "WebSocket", "D3"],
    },
    Project {
        title: "Habit Tracker",
        description: "Streak-based habit app with widgets and gentle reminders.",
        category: Category::Mobile,
        tags: &["Flutter", "Firebase"],
    },
    Project {
        title: "Museum Wayfinding",
        description: "Signage and interactive kiosk flows for a city museum.",
        category: Category::Design,
        tags: &["Illustrator", "Prototyping"],
    },
];
