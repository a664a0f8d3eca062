//! Content model for the marketing page.

use serde::Serialize;

const LOGO_URL: &str = "https://i.imgur.com/Ql4iOgH.png";
const LOGO_ALT: &str = "Arenal Jungle Tours Logo";
const BACKGROUND_URL: &str = "https://images.unsplash.com/photo-1580458148391-8c4951dc1465?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80";

/// An image resolved by the hosting environment. Text surfaces show `alt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    pub url: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub logo: Asset,
    pub title: &'static str,
    pub emblem: &'static str,
    pub chat_button: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Welcome {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tour {
    pub name: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hours {
    pub title: &'static str,
    pub lines: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Admission {
    pub title: &'static str,
    pub prices: Vec<&'static str>,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitorInfo {
    pub heading: &'static str,
    pub hours: Hours,
    pub admission: Admission,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operator {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub copyright: &'static str,
    pub address: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

/// Everything the page displays, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteContent {
    pub background: Asset,
    pub header: Header,
    pub welcome: Welcome,
    pub tours_heading: &'static str,
    pub tours: Vec<Tour>,
    pub visitor_info: VisitorInfo,
    pub operator: Operator,
    pub footer: Footer,
}

impl SiteContent {
    pub fn sloth_park() -> Self {
        let logo = Asset {
            url: LOGO_URL,
            alt: LOGO_ALT,
        };

        Self {
            background: Asset {
                url: BACKGROUND_URL,
                alt: "Rainforest canopy",
            },
            header: Header {
                logo,
                title: "Sloth Park",
                emblem: "🦥",
                chat_button: "Chat with Sammy the Sloth",
            },
            welcome: Welcome {
                heading: "Welcome to Sloth Park",
                body: "Experience the magical world of sloths in their natural habitat. Our sanctuary is home to over 25 sloths from around the world, providing a safe environment for these amazing creatures.",
            },
            tours_heading: "Our Tours",
            tours: vec![
                Tour {
                    name: "The Canopy Crawl",
                    description: "Observe sloths in their natural habitat high in the trees. Our elevated walkways give you a sloth's-eye view of the forest.",
                    duration: "2 hours",
                },
                Tour {
                    name: "The Slow Safari",
                    description: "A guided ground tour through our sanctuary with multiple sloth viewing stations and educational presentations.",
                    duration: "1.5 hours",
                },
                Tour {
                    name: "The Night Watcher",
                    description: "Experience the nocturnal activities of sloths with our special evening tour. Limited availability.",
                    duration: "2 hours",
                },
            ],
            visitor_info: VisitorInfo {
                heading: "Visitor Information",
                hours: Hours {
                    title: "Hours",
                    lines: vec![
                        "Open daily: 9am - 5pm",
                        "Last tour starts: 3:30pm",
                        "Night tours: Fridays & Saturdays, 7pm - 9pm",
                    ],
                },
                admission: Admission {
                    title: "Admission",
                    prices: vec![
                        "Adults: $25",
                        "Children (4-12): $15",
                        "Children under 3: Free",
                    ],
                    note: "All proceeds go toward sloth conservation efforts.",
                },
            },
            operator: Operator {
                heading: "Proudly operated by Arenal Jungle Tours",
                body: "Sloth Park is a proud member of the Arenal Jungle Tours family. With over 15 years of experience in eco-tourism, we're committed to providing unforgettable wildlife experiences while supporting conservation efforts throughout Costa Rica.",
            },
            footer: Footer {
                copyright: "© 2025 Sloth Park - An Arenal Jungle Tours Experience",
                address: "123 Rainforest Way, Slothville, Costa Rica",
                email: "info@slothpark.com",
                phone: "+506 2479-1234",
            },
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::sloth_park()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_tours_in_order() {
        let site = SiteContent::sloth_park();
        let names: Vec<_> = site.tours.iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec!["The Canopy Crawl", "The Slow Safari", "The Night Watcher"]
        );
        assert_eq!(site.tours[1].duration, "1.5 hours");
    }

    #[test]
    fn test_visitor_info() {
        let info = SiteContent::sloth_park().visitor_info;
        assert_eq!(info.hours.lines.len(), 3);
        assert!(info.hours.lines[0].contains("9am - 5pm"));
        assert_eq!(info.admission.prices[0], "Adults: $25");
        assert!(info.admission.note.contains("conservation"));
    }

    #[test]
    fn test_footer_contact() {
        let footer = SiteContent::sloth_park().footer;
        assert_eq!(footer.email, "info@slothpark.com");
        assert_eq!(footer.phone, "+506 2479-1234");
    }

    #[test]
    fn test_assets_have_alt_text() {
        let site = SiteContent::sloth_park();
        assert_eq!(site.header.logo.alt, "Arenal Jungle Tours Logo");
        assert!(site.header.logo.url.starts_with("https://"));
        assert!(!site.background.alt.is_empty());
    }

    #[test]
    fn test_content_serializes() {
        let json = serde_json::to_value(SiteContent::default()).unwrap();
        assert_eq!(json["header"]["title"], "Sloth Park");
        assert_eq!(json["tours"].as_array().map(|t| t.len()), Some(3));
    }
}
