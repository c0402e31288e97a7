//! The portal's built-in content: sections, quizzes and branch locations.

use crate::{
    Branch, Catalog, CatalogError, Content, Coordinate, Location, PinColor, Quiz, Section,
};

pub const LOCATIONS_TITLE: &str = "Dolf Headquarters Map";
pub const ALL_BRANCHES_ADDRESS: &str =
    "Dolf Technologies - Multiple Locations (Red Pin: Egypt Branch, Blue Pin: SA Branch)";

const TOUR_VIDEO: &str = "assets/Screen Recording 2025-07-01 104339.mp4";

impl Catalog {
    pub fn builtin() -> Result<Catalog, CatalogError> {
        Catalog::new(builtin_sections(), builtin_quizzes(), builtin_locations())
    }
}

fn video(element: &str, autoplay: bool, muted: bool) -> Content {
    Content::Video {
        element: element.to_string(),
        source: TOUR_VIDEO.to_string(),
        autoplay,
        muted,
    }
}

fn builtin_sections() -> Vec<Section> {
    vec![
        Section::new(
            "welcome",
            "Welcome to DolfTech",
            vec![
                Content::Image {
                    source: "assets/dolftech_logo.jpeg".to_string(),
                    alt: "DolfTech Logo".to_string(),
                },
                Content::paragraph(
                    "We are excited to have you join our team! Explore the portal to learn more about Dolf Technology.",
                ),
            ],
        ),
        Section::new(
            "team",
            "Who Are We ?",
            vec![
                Content::paragraph(
                    "Dolf Technologies a leader in digital transformation since 2007 delivers innovative solutions that seamlessly integrate digital content systems and environments. Our strategies align with Saudi Vision 2030 focusing on broadening horizons, providing tailored expertise, and ensuring seamless integration.",
                ),
                Content::card(None, "Vision", "A pioneer in digital transformation"),
                Content::card(
                    None,
                    "Mission",
                    "Our mission is to apply innovative technologies to develop skills, improve processes and enhance operational efficiency across a range of industries",
                ),
            ],
        ),
        Section::new(
            "vision",
            "Vision",
            vec![Content::paragraph("A pioneer in digital transformation")],
        ),
        Section::new(
            "mission",
            "Mission",
            vec![Content::paragraph(
                "Our mission is to apply innovative technologies to develop skills, improve processes and enhance operational efficiency across a range of industries",
            )],
        ),
        Section::new(
            "values",
            "Values",
            vec![
                Content::bullet(
                    "🛠️",
                    "Empowering Skills",
                    "By boosting client capabilities through innovative digital tools allowing for growth and advancement",
                ),
                Content::bullet(
                    "🎯",
                    "Fostering Innovation",
                    "Creative solutions that precisely address client challenges",
                ),
                Content::bullet(
                    "🚀",
                    "Exceeding Expectations",
                    "Through exceptional service and even better results",
                ),
                Content::bullet(
                    "🤝",
                    "Building Partnerships",
                    "Building strong relationships and collaboration for lasting success",
                ),
            ],
        ),
        Section::new(
            "internaltools",
            "Dolf's Services",
            vec![
                Content::badges(
                    "Digital Content",
                    &["NELC", "TVTC", "Doroob", "Banks", "Telecom"],
                ),
                Content::badges(
                    "Enterprise Platforms",
                    &[
                        "Monsha'at Academy",
                        "Ministry of Sport",
                        "Financial Academy (CBS)",
                    ],
                ),
                Content::badges(
                    "AR/VR/XR Solutions",
                    &["Saudi Aramco", "Ministry of Energy", "Magic Leap"],
                ),
            ],
        ),
        Section::new(
            "whydolf",
            "Why Dolf ?",
            vec![
                Content::heading("🖐️ Why Dolf?"),
                Content::paragraph(
                    "Discover what makes Dolf Technologies the preferred choice for digital transformation solutions.",
                ),
                Content::card(
                    Some("🎯"),
                    "Customized Solutions",
                    "Tailoring solutions to meet clients' specific needs for maximum impact and value",
                ),
                Content::card(
                    Some("🏆"),
                    "Proven Expertise",
                    "Leveraging over 17 years of experience to deliver reliable and enduring digital solutions",
                ),
                Content::card(
                    Some("🚀"),
                    "Innovative Leadership",
                    "Investing in cutting-edge technologies to keep clients ahead in a fast-changing digital world",
                ),
                Content::card(
                    Some("🤝"),
                    "Client-Centric Approach",
                    "Building trust through close collaboration and aligning solutions with clients' goals",
                ),
            ],
        ),
        Section::new(
            "contact",
            "Contact Us",
            vec![
                Content::heading("📧 Contact Us"),
                Content::paragraph(
                    "Feel free to reach out to us. Our team is ready to assist you with any inquiries or needs you may have.",
                ),
                Content::contact("🌐", "Website", &["www.dolftech.com"]),
                Content::contact(
                    "📞",
                    "Phone",
                    &["+966138829411", "+966138829014", "+966548161616"],
                ),
                Content::contact("✉️", "Email", &["humidi@dolftech.com", "info@dolftech.com"]),
                Content::contact("📱", "Social Media", &["in DolfTech", "X DolfLtd"]),
            ],
        ),
        Section::new(
            "tutorialvideos",
            "1st Video about DolfTech",
            vec![
                Content::heading("DolfTech Screen Recording"),
                Content::paragraph(
                    "Watch this screen recording to learn more about DolfTech's platform in action.",
                ),
                video("dolftech-tutorial-video", true, true),
            ],
        ),
        Section::new(
            "companytourvideo",
            "Company Tour Video",
            vec![video("company-tour-video", true, false)],
        ),
        Section::new(
            "platformdemo",
            "DolfTech Platform Demo",
            vec![video("platform-demo-video", true, false)],
        ),
    ]
}

fn builtin_quizzes() -> Vec<Quiz> {
    vec![
        Quiz::new(
            1,
            "What is Dolf Technology a pioneer in?",
            &[
                "Artificial Intelligence",
                "Digital Transformation",
                "Mobile Apps",
                "Social Media",
            ],
            1,
        ),
        Quiz::new(
            2,
            "Which of the following is NOT one of Dolf Technology's core values?",
            &[
                "Empowering Skills",
                "Fostering Innovation",
                "Exceeding Expectations",
                "Maximizing Profits",
            ],
            3,
        ),
        Quiz::new(
            3,
            "How many years of experience does Dolf Technology leverage for delivering digital solutions?",
            &["5 years", "10 years", "17 years", "25 years"],
            2,
        ),
        Quiz::new(
            4,
            "What is the mission of Dolf Technology?",
            &[
                "To create mobile games",
                "To apply innovative technologies to develop skills, improve processes, and enhance operational efficiency",
                "To sell hardware",
                "To provide social media marketing",
            ],
            1,
        ),
    ]
}

fn builtin_locations() -> Vec<Location> {
    vec![
        Location {
            branch: Branch::Egypt,
            label: "Egypt Branch".to_string(),
            address: "DOLF TECHNOLOGIES، 3 Abd El-Salam Ibrahim, Al Matar, El Nozha, Cairo Governorate 4470311, Egypt".to_string(),
            coordinate: Coordinate::new(30.0444, 31.2357),
            pin: PinColor::Red,
        },
        Location {
            branch: Branch::Sa,
            label: "SA Branch".to_string(),
            address: "2925 طريق الأمير سلطان، Al Andalus, Sidra Complex, Al Khobar 34437".to_string(),
            coordinate: Coordinate::new(26.333348927579664, 50.18430572906374),
            pin: PinColor::Blue,
        },
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builtin_catalog_assembles() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.sections().len(), 11);
        assert_eq!(catalog.quizzes().len(), 4);
        assert_eq!(catalog.locations().len(), 2);
    }

    #[test]
    fn builtin_answer_key() {
        let catalog = Catalog::builtin().unwrap();
        let answers: Vec<&str> = catalog
            .quizzes()
            .iter()
            .filter_map(Quiz::correct_option)
            .collect();
        assert_eq!(
            answers,
            vec![
                "Digital Transformation",
                "Maximizing Profits",
                "17 years",
                "To apply innovative technologies to develop skills, improve processes, and enhance operational efficiency",
            ]
        );
    }

    #[test]
    fn egypt_branch_coordinates() {
        let catalog = Catalog::builtin().unwrap();
        let egypt = catalog.location(Branch::Egypt).unwrap();
        assert_eq!(egypt.coordinate, Coordinate::new(30.0444, 31.2357));
        assert_eq!(egypt.pin, PinColor::Red);
    }
}
