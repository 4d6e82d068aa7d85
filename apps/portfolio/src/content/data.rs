use super::models::*;

pub const CV_DOWNLOAD_URL: &str =
    "https://drive.google.com/file/d/12fXI5299pWbLO0_VhErdW30oV_KDH3Ey/view?usp=drivesdk";

pub const RESUME: Resume = Resume {
    cv_download_url: CV_DOWNLOAD_URL,
    education: EDUCATION,
    volunteer: VOLUNTEER,
    experience: EXPERIENCE,
    projects: PROJECTS,
    certifications: CERTIFICATIONS,
};

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        degree: "Bachelor of Engineering in Computer Engineering",
        institution: "Dr. D Y Patil School of Engineering and Technology, Pune",
        period: "August 2021 - Present",
        description: "SGPA: 7.81",
    },
    EducationEntry {
        degree: "12th HSC Science",
        institution: "Shri Bhairavnath Junior College, Pune",
        period: "July 2019 - June 2021",
        description: "Percentage: 78.33%",
    },
    EducationEntry {
        degree: "10th SSC",
        institution: "Priyadarshani English Medium School, Pune",
        period: "June 2007 - June 2019",
        description: "Percentage: 66.40%",
    },
];

pub const EXPERIENCE: &[ExperienceEntry] = &[ExperienceEntry {
    title: "Java Developer Intern",
    company: "Novillex Technologies Pvt Ltd, Pune",
    period: "Jan 2024 - Mar 2024",
    achievements: &[
        "Developed and optimized database queries in Hospital and Library Management Systems, reducing data retrieval time by 35%.",
        "Designed scalable database structures to enhance system performance by 40%.",
        "Revamped UI/UX, improving user engagement by 25%.",
        "Collaborated with cross-functional teams to debug and refine functionalities, increasing system stability by 30%",
    ],
}];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Hospital Management System",
        period: "Aug 2024 - Dec 2024",
        description: &[
            "Developed a web-based hospital management system to streamline patient registration, doctor appointments, and billing.",
            "Designed and implemented secure user authentication and role-based access control (Admin, Doctor, Patient).",
            "Integrated MySQL database for efficient data storage and retrieval.",
        ],
    },
    ProjectEntry {
        title: "Online Bike Rental System",
        period: "Mar 2023 - Nov 2023",
        description: &[
            "Engineered a user-friendly rental system using HTML, CSS, MySQL, and Python, increasing user retention by 30%.",
            "Integrated a secure payment gateway facilitating 100+ transactions per day.",
            "Enhanced backend database operations, minimizing booking failures by 20%.",
        ],
    },
];

pub const VOLUNTEER: &[VolunteerEntry] = &[VolunteerEntry {
    organization: "NSS Volunteer",
    period: "Aug 2021 - Present",
    activities: &[
        "Led 10+ tree plantation drives, increasing campus greenery by 20%.",
        "Organized 5+ blood donation camps, collecting 300+ units of blood for healthcare initiatives.",
        "Conducted awareness programs on cleanliness and hygiene in nearby rural schools.",
        "Participated in Swachh Bharat Abhiyan drives in multiple communities.",
        "Volunteered in COVID-19 relief efforts, distributing masks and sanitizers to over 200 individuals.",
    ],
}];

pub const CERTIFICATIONS: &[CertificationEntry] = &[
    CertificationEntry {
        title: "Full-Stack Java Developer - (HTML, CSS, Java, MySQL, Hibernate, JDBC)",
        date: "Mar 2024 - Nov 2024",
        link: "https://example.com/fullstack-java",
    },
    CertificationEntry {
        title: "TCS iON Career Edge - Communication, Presentation, and Soft Skills",
        date: "Feb 2023 - Apr 2023",
        link: "https://drive.google.com/file/d/1yGjAcpkcQgyl0wazHbT0_ykYb07CANtr/view?usp=drivesdk",
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Programming Languages",
        icon: Icon::Code,
        skills: &["Java", "JavaScript"],
    },
    SkillCategory {
        title: "Web Technologies ",
        icon: Icon::Layout,
        skills: &[
            "HTML5",
            "CSS3",
            "Bootstrap",
            "WordPress",
            "React.js",
            "APIIntegration & Automation.",
        ],
    },
    SkillCategory {
        title: "Frameworks & Libraries",
        icon: Icon::Layout,
        skills: &["Spring Boot", "Hibernate"],
    },
    SkillCategory {
        title: "DevOps & CI/CD",
        icon: Icon::Layout,
        skills: &["Docker", "Jenkins (working knowledge)", "Git", "GitHub", "GitLab."],
    },
    SkillCategory {
        title: "Databases",
        icon: Icon::Database,
        skills: &["MySQL", "SQLite"],
    },
    SkillCategory {
        title: "Operating System",
        icon: Icon::Server,
        skills: &["Windows", "Linux(Ubuntu)"],
    },
    SkillCategory {
        title: "Scripting",
        icon: Icon::Settings,
        skills: &["Shell Scripting"],
    },
    SkillCategory {
        title: "IDE & Tools",
        icon: Icon::Settings,
        skills: &["Maven", "Tomcat", "VSCode", "Spring Tool Suite", "Eclipse", "Postman"],
    },
    SkillCategory {
        title: "Productivity & AI Tools",
        icon: Icon::Settings,
        skills: &["Cursor.ai", "Lovable.ai", "Replit.ai", "GitHub Copilot"],
    },
];

pub const CONTACT_DETAILS: ContactDetails = ContactDetails {
    info: CONTACT_INFO,
    social: SOCIAL_LINKS,
};

pub const CONTACT_INFO: &[ContactInfoEntry] = &[
    ContactInfoEntry {
        icon: Icon::Mail,
        label: "Email",
        value: "surajshedage45@gmail.com",
    },
    ContactInfoEntry {
        icon: Icon::Phone,
        label: "Phone",
        value: "+91-9356681781",
    },
    ContactInfoEntry {
        icon: Icon::MapPin,
        label: "Location",
        value: "Pune, Maharashtra, India",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: Icon::Github,
        label: "GitHub",
        href: "https://github.com/",
    },
    SocialLink {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        href: "https://linkedin.com/",
    },
    SocialLink {
        icon: Icon::Mail,
        label: "Email",
        href: "mailto:surajshedage45@gmail.com",
    },
];

pub const SKILLS_INTRO: &str = "As a computer engineering student and Java developer, I've developed expertise \
in various technologies and tools throughout my academic and project work.";

pub const CONTACT_INTRO: &str = "Have a question or want to work together? Fill out the form below or \
reach out directly through my contact information.";
