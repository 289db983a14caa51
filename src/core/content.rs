//! Display copy for the landing page.
//!
//! Every string the page shows lives here so the markup and the tests
//! agree on a single source.

/// Brand label shown at the left of the navigation bar
pub const BRAND: &str = "My Website";

/// Navigation labels, left to right. None of them navigate anywhere.
pub const NAV_LINKS: [&str; 4] = ["Home", "About", "Services", "Contact"];

pub const HERO_TITLE: &str = "Welcome to My Website";
pub const HERO_SUBTITLE: &str = "Building amazing experiences with Next.js and TypeScript";

/// Label of the decorative call-to-action button
pub const CTA_LABEL: &str = "Get Started";

pub const FEATURES_HEADING: &str = "Our Features";

/// A single card in the feature grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// Feature cards in display order
pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Fast Performance",
        description: "Built with Next.js for optimal performance and SEO.",
    },
    Feature {
        title: "Type Safe",
        description: "TypeScript ensures code reliability and maintainability.",
    },
    Feature {
        title: "Modern Design",
        description: "Tailwind CSS for beautiful and responsive designs.",
    },
];

pub const COPYRIGHT: &str = "© 2024 My Website. All rights reserved.";

/// Document `<title>`
pub const PAGE_TITLE: &str = BRAND;

/// Content of the description meta tag, same copy as the hero subtitle
pub const PAGE_DESCRIPTION: &str = HERO_SUBTITLE;
