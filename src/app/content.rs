//! Static page copy.

pub const OWNER: &str = "Mohammed Samiq Khan";
pub const RESUME_PATH: &str = "/RESUME.pdf";

pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

/// Sections the header tracks, in page order.
pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection { id: "home", label: "Home" },
    NavSection { id: "about", label: "About" },
    NavSection { id: "skills", label: "Skills" },
    NavSection { id: "projects", label: "Projects" },
    NavSection { id: "education", label: "Education" },
    NavSection { id: "experience", label: "Experience" },
    NavSection { id: "contact", label: "Contact" },
];

pub const FOOTER_LINKS: &[&str] = &["home", "about", "skills", "projects", "contact"];

pub struct Social {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIALS: &[Social] = &[
    Social {
        label: "GitHub",
        href: "https://github.com/Samiqkhan",
        icon: "devicon-github-plain",
    },
    Social {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/mohammed-samiq-khan-r/",
        icon: "devicon-linkedin-plain",
    },
];

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "Technical Languages",
        skills: &["Core of Java", "HTML", "SQL", "JS", "CSS", "React", "Next.js"],
    },
    SkillCategory {
        title: "Design & UI/UX",
        skills: &["Figma", "Canva", "Wix", "Blender", "AutoCAD"],
    },
    SkillCategory {
        title: "Other Tools & Technologies",
        skills: &["Firebase", "Lidar", "Git & GitHub", "Power BI", "Tableau", "UI path"],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Weather Prediction App",
        description: "A user-friendly app for real-time weather forecasts with an interactive interface.",
        tags: &["HTML", "JavaScript", "API"],
        live_url: Some("https://samiqkhan.github.io/Weather_prediction/"),
        github_url: Some("https://github.com/Samiqkhan/Weather_prediction"),
    },
    Project {
        title: "College 3D Map",
        description: "Interactive 3D model for navigating classrooms and departments on campus.",
        tags: &["Blender", "Three.js", "HTML"],
        live_url: None,
        github_url: None,
    },
    Project {
        title: "Resume Builder Website",
        description: "Online resume generator with student and professional templates.",
        tags: &["HTML/CSS", "JavaScript"],
        live_url: Some("https://samiqkhan.github.io/Resume-Builder/"),
        github_url: Some("https://github.com/Samiqkhan/Resume-Builder"),
    },
    Project {
        title: "Sri lakshira - Saree Website",
        description: "A fully functional e-commerce website for a saree business with an admin panel.",
        tags: &["React", "Firebase"],
        live_url: None,
        github_url: None,
    },
    Project {
        title: "Tournament Software Website",
        description: "Badminton tournament platform with live score updates and match info.",
        tags: &["HTML", "Google Sites"],
        live_url: Some("https://www.southindiasportsassociation.in/"),
        github_url: None,
    },
    Project {
        title: "Auditor Website (eAuditor)",
        description: "Website for an advocate offering services like income tax filing.",
        tags: &["HTML/CSS", "JavaScript"],
        live_url: Some("https://samiqkhan.github.io/Auditor/"),
        github_url: Some("https://github.com/Samiqkhan/Auditor"),
    },
];

/// One entry on the education or experience timeline.
pub struct Milestone {
    pub period: &'static str,
    pub title: &'static str,
    pub place: &'static str,
    pub description: &'static str,
}

pub const EDUCATION: &[Milestone] = &[
    Milestone {
        period: "2022 - Present",
        title: "B.E in Computer Science (AIML)",
        place: "K S Rangasamy College of Technology",
        description: "Pursuing a Bachelor's degree with a specialization in Artificial Intelligence and Machine Learning. Focusing on advanced algorithms, neural networks, and practical applications of AI.",
    },
    Milestone {
        period: "2021 - 2022",
        title: "Higher Secondary Education",
        place: "St.john's Matriculation Higher Secondary School",
        description: "Completed higher secondary education with a focus on Mathematics, Physics, and Computer Science. Graduated with distinction.",
    },
    Milestone {
        period: "2019 - 2020",
        title: "Secondary Education",
        place: "St.john's Matriculation Higher Secondary School",
        description: "Completed secondary education with excellent academic performance, developing a strong foundation in mathematics and science.",
    },
];

pub const EXPERIENCE: &[Milestone] = &[
    Milestone {
        period: "Feb 2025 - Present",
        title: "AI Developer Intern",
        place: "Metatroncube Software Solutions",
        description: "Developing 3D digital experiences for real estate using LiDAR data and Insta360 imagery to create immersive, street-view-style virtual tours.",
    },
    Milestone {
        period: "July 2023",
        title: "Full Stack Web Development Intern",
        place: "Stack Queue Education",
        description: "Assisted in the development of websites and web applications, gaining practical experience in front-end and back-end technologies.",
    },
];

pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    pub description: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Google Cybersecurity Professional Certificate",
        issuer: "Coursera (Google)",
        year: "2024",
        description: "Completed comprehensive training covering network security, incident response, and security frameworks.",
    },
    Certification {
        title: "Python for Data Science (Elite Certification)",
        issuer: "NPTEL",
        year: "2023",
        description: "Earned the prestigious Elite certification for outstanding performance in the NPTEL \"Python for Data Science\" course.",
    },
    Certification {
        title: "Data Analysis with Python",
        issuer: "Coursera",
        year: "2023",
        description: "Mastered data analysis techniques using Python, including data wrangling, exploration, and building predictive models.",
    },
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Website Development",
        description: "Custom websites built with modern technologies and responsive design.",
    },
    Service {
        title: "UI/UX Design",
        description: "Beautiful and intuitive user interfaces that enhance user experience.",
    },
    Service {
        title: "Digital Marketing",
        description: "SEO optimization, social media management, and content strategies.",
    },
    Service {
        title: "E-Commerce Solutions",
        description: "Complete online stores with payment integration and inventory.",
    },
    Service {
        title: "Logo & Brand Design",
        description: "Creative branding solutions that make your business stand out.",
    },
    Service {
        title: "Web Hosting",
        description: "Reliable hosting solutions and ongoing website maintenance.",
    },
];

pub struct Stat {
    pub target: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { target: 10, suffix: "+", label: "Projects Done" },
    Stat { target: 5, suffix: "+", label: "Happy Clients" },
    Stat { target: 1, suffix: "+", label: "Years Experience" },
    Stat { target: 100, suffix: "%", label: "Satisfaction" },
];

pub struct ContactInfo {
    pub title: &'static str,
    pub details: &'static str,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        title: "Location",
        details: "Salem, Tamil Nadu",
    },
    ContactInfo {
        title: "Email",
        details: "samiqkhan2425@gmail.com",
    },
    ContactInfo {
        title: "Phone",
        details: "+91 90923 85001",
    },
];

pub fn nav_label(id: &str) -> &'static str {
    NAV_SECTIONS
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.label)
        .unwrap_or("")
}
