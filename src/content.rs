//! Static content displayed verbatim by the page sections.
//!
//! Plain `'static` records with no validation or persistence. Sections iterate
//! over these slices; nothing else in the crate mutates them.

pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    /// devicon class rendered as `<i class="...">`
    pub icon: &'static str,
}

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Stat {
    pub label: &'static str,
    pub target: u32,
    pub suffix: &'static str,
}

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub struct SkillCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub items: &'static [Skill],
}

pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub current: bool,
    pub achievements: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
}

pub struct ProjectMetric {
    pub label: &'static str,
    pub value: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
    pub tech: &'static [&'static str],
    pub description: &'static str,
    pub metrics: &'static [ProjectMetric],
    pub github: Option<&'static str>,
    pub live: Option<&'static str>,
}

pub struct EducationEntry {
    pub degree: &'static str,
    pub university: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub gpa: &'static str,
    pub courses: &'static [&'static str],
}

pub struct Achievement {
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub struct QuickStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SITE_NAME: &str = "Rudrankur Indurkar";
pub const SITE_MONOGRAM: &str = "RI";
pub const CONTACT_EMAIL: &str = "devangumrane8888@gmail.com";
pub const CONTACT_LOCATION: &str = "Pune, India";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "About", href: "#about" },
    NavItem { name: "Skills", href: "#skills" },
    NavItem { name: "Experience", href: "#experience" },
    NavItem { name: "Projects", href: "#projects" },
    NavItem { name: "Education", href: "#education" },
    NavItem { name: "Achievements", href: "#achievements" },
    NavItem { name: "Contact", href: "#contact" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/ShallowAwe",
        icon: "devicon-github-plain",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/in/Rudrankur_Indurkar",
        icon: "devicon-linkedin-plain",
    },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { label: "Years Experience", target: 1, suffix: "+" },
    Stat { label: "Projects Completed", target: 10, suffix: "+" },
    Stat { label: "Technologies", target: 15, suffix: "+" },
];

pub const ABOUT_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "🚀",
        title: "Architecting Systems",
        description: "Designing modular, maintenance-first backend architectures using Node.js and Express.",
    },
    Highlight {
        icon: "🗄️",
        title: "Database Ownership",
        description: "Implementing optimized MongoDB schemas with a focus on data integrity and query performance.",
    },
    Highlight {
        icon: "🔐",
        title: "Security & Lifecycle",
        description: "Owning the complete API lifecycle, from secure JWT authentication to production deployment.",
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        id: "backend",
        title: "Backend Core",
        icon: "🖥️",
        description: "Architecting scalable server-side systems",
        items: &[
            Skill { name: "Node.js", level: 90 },
            Skill { name: "Express.js", level: 88 },
            Skill { name: "REST API Design", level: 92 },
            Skill { name: "JWT & RBAC", level: 85 },
        ],
    },
    SkillCategory {
        id: "database",
        title: "Data & Infrastructure",
        icon: "🗃️",
        description: "Database modeling and dev tools",
        items: &[
            Skill { name: "MongoDB", level: 88 },
            Skill { name: "PostgreSQL", level: 75 },
            Skill { name: "Git & Version Control", level: 90 },
            Skill { name: "Postman API Ops", level: 85 },
        ],
    },
    SkillCategory {
        id: "lang",
        title: "Core Languages",
        icon: "📝",
        description: "Technical foundations",
        items: &[
            Skill { name: "JavaScript (ES6+)", level: 92 },
            Skill { name: "Technical Logic", level: 85 },
        ],
    },
    SkillCategory {
        id: "frontend",
        title: "Tools & Frontend",
        icon: "📱",
        description: "Supporting technologies",
        items: &[
            Skill { name: "React.js", level: 80 },
            Skill { name: "Figma (UI/UX)", level: 70 },
        ],
    },
    SkillCategory {
        id: "soft",
        title: "Engineering Mindset",
        icon: "🧠",
        description: "Professional attributes",
        items: &[
            Skill { name: "System Ownership", level: 95 },
            Skill { name: "Problem Solving", level: 95 },
            Skill { name: "Technical Documentation", level: 85 },
        ],
    },
];

pub const PHILOSOPHY_ITEMS: &[Highlight] = &[
    Highlight {
        icon: "🔄",
        title: "API Reliability",
        description: "Building robust error-handling layers and comprehensive logging for fail-safe production environments.",
    },
    Highlight {
        icon: "🧩",
        title: "Data Integrity",
        description: "Prioritizing schema normalization and efficient indexing to ensure data consistency and system performance.",
    },
    Highlight {
        icon: "🛡️",
        title: "Security-First",
        description: "Implementing stateless authentication and Role-Based Access Control (RBAC) as the foundation of system design.",
    },
];

pub const EXPERIENCES: &[ExperienceEntry] = &[ExperienceEntry {
    role: "Flutter / Java Developer",
    company: "Altwise",
    location: "Pune, Maharashtra",
    period: "June 2024 – Present",
    current: true,
    achievements: &[
        "Developed 3 cross-platform mobile apps for 500+ active users with seamless Android & iOS compatibility.",
        "Engineered responsive UI components and micro-animations, achieving 40% faster load times.",
        "Implemented Riverpod-based state management, improving performance by 35% and reducing code complexity.",
        "Integrated Firebase real-time services and RESTful APIs, cutting sync latency by 60%.",
        "Led daily code reviews maintaining 95% code-quality standards and zero missed deadlines.",
    ],
    tech_stack: &["Flutter", "Dart", "Java", "Riverpod", "Firebase", "REST API"],
}];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "QMS Application",
        category: "Enterprise Backend Architecture",
        icon: "🖥️",
        tech: &["Node.js", "Express", "MongoDB"],
        description: "A comprehensive Quality Management System focused on modular API design and data integrity. Engineered complex MongoDB aggregation pipelines for audit reporting and implemented hierarchical RBAC for multi-org security compliance.",
        metrics: &[
            ProjectMetric { label: "Security", value: "JWT/RBAC" },
            ProjectMetric { label: "Data", value: "Aggregation" },
            ProjectMetric { label: "Arch", value: "Modular" },
        ],
        github: Some("https://github.com/devangumrane"),
        live: None,
    },
    Project {
        title: "LetsInsurance Platform",
        category: "High-Throughput Services",
        icon: "⚙️",
        tech: &["React.js", "Node.js", "Express"],
        description: "An insurance comparison engine built for scalability. Developed decoupled backend services to manage insurance flows, integrating complex business logic with modular handlers for seamless service bridging.",
        metrics: &[
            ProjectMetric { label: "Throughput", value: "High" },
            ProjectMetric { label: "Logic", value: "Decoupled" },
            ProjectMetric { label: "Stack", value: "MERN" },
        ],
        github: Some("https://github.com/devangumrane"),
        live: None,
    },
    Project {
        title: "PCMC Divyang System",
        category: "Government API Infrastructure",
        icon: "🏛️",
        tech: &["Node.js", "Express.js"],
        description: "A security-first backend system managing citizen welfare workflows. Designed and implemented RESTful endpoints focusing on data consistency, validation rules, and reliable transaction handling under PCMC.",
        metrics: &[
            ProjectMetric { label: "Auth", value: "Stateless" },
            ProjectMetric { label: "Reliability", value: "ACID" },
            ProjectMetric { label: "Scale", value: "Public" },
        ],
        github: None,
        live: None,
    },
];

pub const EDUCATION: &[EducationEntry] = &[EducationEntry {
    degree: "Bachelor of Engineering in Printing Technology",
    university: "Savitribai Phule Pune University (SPPU)",
    location: "Pune, Maharashtra",
    period: "Graduated: 2023",
    gpa: "N/A",
    courses: &[
        "Process Management",
        "Compliance Workflows",
        "System Design",
        "Data Modeling",
        "Backend Architecture",
    ],
}];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        target: 99,
        suffix: ".8%",
        label: "Transaction Success",
        description: "Achieved in E-Commerce application through robust error handling",
        icon: "✅",
    },
    Achievement {
        target: 45,
        suffix: "%",
        label: "Performance Boost",
        description: "Reduced app startup time through optimized state management",
        icon: "⚡",
    },
    Achievement {
        target: 500,
        suffix: "+",
        label: "Active Users",
        description: "Serving users across multiple production applications",
        icon: "👥",
    },
    Achievement {
        target: 10,
        suffix: "+",
        label: "Projects Delivered",
        description: "Successfully completed and deployed to production",
        icon: "💼",
    },
];

pub const ADDITIONAL_STATS: &[QuickStat] = &[
    QuickStat { value: "95%", label: "Code Quality" },
    QuickStat { value: "60%", label: "Faster Sync" },
    QuickStat { value: "Zero", label: "Missed Deadlines" },
    QuickStat { value: "100%", label: "Client Satisfaction" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets_are_fragment_anchors() {
        for item in NAV_ITEMS {
            assert!(
                item.href.starts_with('#'),
                "nav item {} should link to an in-page section",
                item.name
            );
        }
    }

    #[test]
    fn test_sections_have_content() {
        assert!(!SKILL_CATEGORIES.is_empty());
        assert!(!EXPERIENCES.is_empty());
        assert!(!PROJECTS.is_empty());
        assert!(!EDUCATION.is_empty());
        assert!(!ACHIEVEMENTS.is_empty());
        assert!(SKILL_CATEGORIES.iter().all(|c| !c.items.is_empty()));
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES {
            for skill in category.items {
                assert!(skill.level <= 100, "{} level out of range", skill.name);
            }
        }
    }
}
