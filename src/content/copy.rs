//! Static copy for every page section.

use chrono::{Datelike, NaiveDate};

/// Page sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Impact,
    Speaking,
    Recommendations,
}

impl Section {
    pub const NAV: [Section; 4] = [
        Section::About,
        Section::Impact,
        Section::Speaking,
        Section::Recommendations,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Impact => "Impact",
            Section::Speaking => "Speaking",
            Section::Recommendations => "Recommendations",
        }
    }

    /// Fragment id used in the original web page.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "#about",
            Section::Impact => "#impact",
            Section::Speaking => "#speaking",
            Section::Recommendations => "#recommendations",
        }
    }
}

pub const OWNER_NAME: &str = "Kamel Hothi";
pub const OWNER_FULL_NAME: &str = "Kamel Hothi OBE";
pub const MONOGRAM: &str = "KH";
pub const PROFILE_URL: &str = "https://www.linkedin.com/in/kamelhothi";
pub const PROFILE_IMAGE: &str = "/profile.jpg";
pub const PROFILE_IMAGE_MISSING: &str =
    "Add profile.jpg to the public folder to display the photo.";

pub const HERO_TAGLINE: &str = "Board Advisor • Speaker • Diversity Champion";
pub const HERO_HEADLINE: (&str, &str, &str) =
    ("Empowering ", "Inclusive Leadership", " & Global Impact");
pub const HERO_INTRO: &str = "Strategic advisor and keynote voice on innovation, equity, and transformative growth across sectors. Dedicated to unlocking potential in people, purpose, and performance.";
pub const HERO_PRIMARY_CTA: &str = "Book a Talk";
pub const HERO_SECONDARY_CTA: &str = "Discover Impact";

/// Label, value, suffix.
pub const METRICS: [(&str, u32, &str); 4] = [
    ("Global Keynotes", 250, ""),
    ("Leaders Mentored", 1200, ""),
    ("Countries Reached", 35, ""),
    ("Awards & Honors", 18, ""),
];

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "Kamel Hothi OBE is a transformational voice helping organizations embed inclusive leadership, resilience, and human-centered innovation. She brings decades of strategic board experience guiding enterprises through growth, governance, and cultural impact.",
    "Her work champions underrepresented talent, fosters psychological safety, and accelerates purpose-led performance. She bridges corporate strategy with social value, enabling sustainable transformation.",
    "Kamel advises boards, mentors emerging leaders, and speaks globally on diversity of thought, ethical leadership, and equitable opportunity.",
];

pub const FOCUS_THEMES: [&str; 8] = [
    "Inclusive Leadership",
    "Board Advisory",
    "Cultural Transformation",
    "Equity & Belonging",
    "Ethical Growth",
    "Mentorship",
    "Purpose Strategy",
    "Keynote Speaking",
];

pub const SIGNATURE_TOPICS: [&str; 3] = [
    "Designing resilient, human-centered leadership cultures.",
    "Translating diversity into sustainable business value.",
    "Transformational mentorship and inclusive talent pipelines.",
];

pub const SPEAKING_INTRO: &str = "High-impact sessions blending vision, practicality, and empathy, tailored for executive teams, summits, and transformative leadership programs.";

/// Title, body.
pub const ENGAGEMENTS: [(&str, &str); 3] = [
    (
        "Inclusive Leadership Labs",
        "Immersive sessions that reframe leadership models through equity, empathy, and strategic foresight.",
    ),
    (
        "Board Diversity Strategy",
        "Advisory support aligning governance with innovation, representation, and ethical growth.",
    ),
    (
        "Purpose & Performance",
        "Unlocking authentic values to drive culture, engagement, and sustainable outcomes.",
    ),
];

pub const RECOMMENDATIONS_INTRO: &str = "Testimonials from peers and leaders who have partnered with Kamel on advisory, cultural, and leadership transformation initiatives.";
pub const RECOMMENDATIONS_BODY: &str = "Real-world impact reflected through authentic endorsements of character, leadership integrity and transformational influence.";
pub const RECOMMENDATIONS_HINT: &str = "Cards auto-cycle every few seconds; interact by tapping the top card to advance the stack manually or scroll.";
pub const RECOMMENDATION_TAGS: [&str; 6] = [
    "Strategic Insight",
    "Inclusive Leadership",
    "Mentorship",
    "Governance",
    "Culture Shift",
    "Purpose Alignment",
];
pub const STACK_HINT: &str = "Scroll / Swipe / Tap";

/// Copyright line for the footer, dated by the viewer's local calendar.
pub fn footer_line(today: NaiveDate) -> String {
    format!("© {} {OWNER_FULL_NAME}. All rights reserved.", today.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_covers_every_section_once() {
        let anchors: Vec<&str> = Section::NAV.iter().map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            vec!["#about", "#impact", "#speaking", "#recommendations"]
        );
    }

    #[test]
    fn footer_mentions_owner() {
        assert_eq!(
            footer_line(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()),
            "© 2026 Kamel Hothi OBE. All rights reserved."
        );
    }

    #[test]
    fn footer_year_follows_calendar_date() {
        let new_years_eve = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let new_year = new_years_eve.succ_opt().unwrap();
        assert!(footer_line(new_years_eve).contains("© 2025 "));
        assert!(footer_line(new_year).contains("© 2026 "));
    }
}
