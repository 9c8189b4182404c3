//! Static portfolio content.

/// Outbound contact affordances, shown in the footer and on the contact page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLinks {
    pub linkedin: &'static str,
    pub github: &'static str,
    pub email: &'static str,
}

impl SocialLinks {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// A headline figure on the About page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    /// Initials shown in the navigation badge.
    pub monogram: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [Highlight],
    pub call_to_action: &'static str,
    pub links: SocialLinks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Brand color for the badge.
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub label: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
}

impl Project {
    /// Repository link, if one is published.
    pub fn github_link(&self) -> Option<&'static str> {
        self.github.filter(|url| !url.is_empty())
    }

    /// Live demo link, if one is published.
    pub fn demo_link(&self) -> Option<&'static str> {
        self.demo.filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceItem {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

/// Default location of the downloadable resume.
pub const RESUME_URL: &str = "/resume.pdf";

pub static PROFILE: Profile = Profile {
    name: "Priti Prasad",
    monogram: "PP",
    headline: "Analyst | Software Developer | React, Java, Spring Boot, Microservices",
    summary: "Experienced Analyst and Software Developer with a demonstrated history at \
        Capgemini and Auctopus. Specialized in backend (Java, Spring Boot, Microservices) \
        and frontend (React, MUI) development. Improved backend performance, mentored teams, \
        and delivered scalable solutions. Passionate about building efficient, user-centric \
        products.",
    highlights: &[
        Highlight {
            title: "Backend Impact",
            body: "Improved backend performance by 40%, scalability by 35%, and efficiency \
                by 30% at Capgemini.",
        },
        Highlight {
            title: "Frontend & Mentorship",
            body: "Specialized in React, improved UX and efficiency by 25%, mentored 5+ \
                junior team members, and built 10+ workflows.",
        },
    ],
    call_to_action: "Want to collaborate or know more?",
    links: SocialLinks {
        linkedin: "https://www.linkedin.com/in/priti-prasad-82888b1a3/",
        github: "https://github.com/PritiPrasad01",
        email: "pritiprasad3105@gmail.com",
    },
};

pub static SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        label: "Languages",
        skills: &[
            Skill { name: "Java", color: "#007396" },
            Skill { name: "JavaScript", color: "#F7DF1E" },
            Skill { name: "TypeScript", color: "#3178C6" },
            Skill { name: "SQL", color: "#4479A1" },
            Skill { name: "HTML/CSS", color: "#E34F26" },
        ],
    },
    SkillGroup {
        label: "Frameworks/Libraries",
        skills: &[
            Skill { name: "Spring", color: "#6DB33F" },
            Skill { name: "ReactJS", color: "#61DAFB" },
            Skill { name: "AngularJS", color: "#DD0031" },
            Skill { name: "MUI", color: "#007FFF" },
            Skill { name: "JWT", color: "#000000" },
            Skill { name: "REST APIs", color: "#00B8D9" },
            Skill { name: "Bootstrap", color: "#7952B3" },
        ],
    },
    SkillGroup {
        label: "Architecture",
        skills: &[Skill { name: "Microservices", color: "#2cb67d" }],
    },
    SkillGroup {
        label: "Platforms",
        skills: &[
            Skill { name: "Azure", color: "#0089D6" },
            Skill { name: "AWS", color: "#FF9900" },
            Skill { name: "ServiceNow", color: "#00ADEF" },
        ],
    },
    SkillGroup {
        label: "Databases",
        skills: &[
            Skill { name: "MongoDB", color: "#47A248" },
            Skill { name: "PostgreSQL", color: "#336791" },
            Skill { name: "MySQL", color: "#4479A1" },
            Skill { name: "SQLDeveloper", color: "#F80000" },
        ],
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "IKEA Payments",
        description: "Integrated TP.Net Tills with IKEA systems. Built a log parser tool that \
            reduced POS transaction recovery time by 40%. (Java, Spring Boot, Microservices, \
            Spring Cloud, Spring Security)",
        github: None,
        demo: None,
    },
    Project {
        title: "NetPeace",
        description: "Developed AI-powered, self-healing network automation interface. \
            Improved UX by 25%, onboarding time by 15%, and resolution time by 50%. \
            (React, JavaScript)",
        github: None,
        demo: None,
    },
];

pub static EXPERIENCE: &[ExperienceItem] = &[
    ExperienceItem {
        role: "Analyst",
        company: "Capgemini Technology Services India Ltd., Bangalore",
        period: "Dec 2023 – Present",
        description: "Improved backend performance by 40%, scalability by 35%, and efficiency \
            by 30%. Mentored 5+ junior team members.",
    },
    ExperienceItem {
        role: "Software Developer",
        company: "Auctopus Technologies Pvt. Ltd.",
        period: "May 2023 – Dec 2023",
        description: "Specialized in React, improved UX and efficiency by 25%. Built 10+ \
            workflows, 15 UI pages integrated with ServiceNow backend. Followed design \
            patterns and best practices.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_groups_are_populated() {
        assert_eq!(SKILL_GROUPS.len(), 5);
        assert!(SKILL_GROUPS.iter().all(|g| !g.skills.is_empty()));
    }

    #[test]
    fn test_empty_project_links_are_hidden() {
        let project = Project {
            title: "t",
            description: "d",
            github: Some(""),
            demo: Some("https://example.com"),
        };
        assert_eq!(project.github_link(), None);
        assert_eq!(project.demo_link(), Some("https://example.com"));
    }

    #[test]
    fn test_mailto() {
        assert_eq!(PROFILE.links.mailto(), "mailto:pritiprasad3105@gmail.com");
    }
}
