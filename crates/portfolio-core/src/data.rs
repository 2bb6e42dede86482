//! Baked-in Site Data
//!
//! Everything the pages render. Fixed at compile time.

use crate::catalog::{Catalog, ALL_CATEGORY};
use crate::models::{Certification, ExpertiseArea, Project, SocialLink, Skill};

pub const PROJECTS: Catalog<Project> = Catalog {
    name: "projects",
    categories: &[ALL_CATEGORY, "AI Security", "Web Exploitation", "Offensive Security"],
    items: &[
        Project {
            title: "AI-Powered Autonomous Pentesting Bot",
            description: "Advanced AI-driven automated penetration testing framework with machine learning-based vulnerability detection",
            technologies: &["Python", "Machine Learning", "Cybersecurity"],
            category: "AI Security",
            github_link: Some("#"),
            live_link: Some("#"),
        },
        Project {
            title: "AI-Based Web Application Exploiter",
            description: "Intelligent web application security assessment tool using AI to identify and exploit complex vulnerabilities",
            technologies: &["AI", "Web Security", "Exploit Development"],
            category: "Web Exploitation",
            github_link: Some("#"),
            live_link: Some("#"),
        },
        Project {
            title: "AI-Powered Phishing Framework",
            description: "Sophisticated phishing simulation and awareness training platform with AI-driven social engineering techniques",
            technologies: &["React", "AI", "Cybersecurity"],
            category: "AI Security",
            github_link: Some("#"),
            live_link: Some("#"),
        },
        Project {
            title: "Web3 & Smart Contract Hacking Framework",
            description: "Comprehensive security assessment tool for blockchain smart contracts and Web3 applications",
            technologies: &["Solidity", "Blockchain", "Ethereum"],
            category: "Offensive Security",
            github_link: Some("#"),
            live_link: Some("#"),
        },
        Project {
            title: "Automated API Pentesting Framework",
            description: "Automated vulnerability scanning and exploitation framework for API security assessment",
            technologies: &["Python", "API Security", "Automation"],
            category: "Web Exploitation",
            github_link: Some("#"),
            live_link: Some("#"),
        },
    ],
};

pub const SKILLS: Catalog<Skill> = Catalog {
    name: "skills",
    categories: &[ALL_CATEGORY, "Programming", "Security Tools", "Frameworks", "Certifications"],
    items: &[
        // Programming
        Skill { name: "Python", level: "Advanced", category: "Programming", proficiency: 90 },
        Skill { name: "JavaScript", level: "Intermediate", category: "Programming", proficiency: 80 },
        Skill { name: "Bash Scripting", level: "Advanced", category: "Programming", proficiency: 85 },
        // Security tools
        Skill { name: "Metasploit", level: "Expert", category: "Security Tools", proficiency: 95 },
        Skill { name: "Burp Suite", level: "Advanced", category: "Security Tools", proficiency: 90 },
        Skill { name: "Nmap", level: "Advanced", category: "Security Tools", proficiency: 85 },
        // Frameworks
        Skill { name: "React", level: "Intermediate", category: "Frameworks", proficiency: 75 },
        Skill { name: "Node.js", level: "Intermediate", category: "Frameworks", proficiency: 70 },
        // Certifications
        Skill { name: "OSCP Preparation", level: "In Progress", category: "Certifications", proficiency: 60 },
        Skill { name: "Kali Linux Certified", level: "Certified", category: "Certifications", proficiency: 85 },
    ],
};

pub const CERTIFICATIONS: Catalog<Certification> = Catalog {
    name: "certifications",
    categories: &[ALL_CATEGORY, "Completed", "Pursuing"],
    items: &[
        Certification {
            title: "Offensive Security Certified Professional (OSCP)",
            issuer: "Offensive Security",
            date: "In Progress",
            description: "Advanced penetration testing certification focusing on hands-on offensive security skills and real-world vulnerability exploitation.",
            status: "Pursuing",
            details: &[
                "Comprehensive penetration testing methodology",
                "Hands-on exploit development",
                "Advanced network and web application security",
            ],
            verification_link: "https://www.offensive-security.com/verify",
        },
        Certification {
            title: "Certified Ethical Hacker (CEH)",
            issuer: "EC-Council",
            date: "2023",
            description: "Comprehensive certification in ethical hacking techniques and cybersecurity principles.",
            status: "Completed",
            details: &[
                "Ethical hacking methodologies",
                "Vulnerability assessment",
                "Penetration testing techniques",
            ],
            verification_link: "https://www.eccouncil.org/verify",
        },
        Certification {
            title: "CompTIA Security+",
            issuer: "CompTIA",
            date: "2022",
            description: "Foundational cybersecurity certification covering core security functions.",
            status: "Completed",
            details: &[
                "Network security",
                "Compliance and operational security",
                "Threats and vulnerabilities",
            ],
            verification_link: "https://www.comptia.org/verify",
        },
        Certification {
            title: "Certified Cybersecurity Educator Professional (CCEP)",
            issuer: "Red Team Leaders",
            date: "2024",
            description: "Professional credential proving expertise in teaching, mentoring, and delivering cybersecurity education with a strong focus on real-world offensive security skills.",
            status: "Completed",
            details: &[
                "Cybersecurity curriculum design & pedagogy",
                "Real-world offensive security labs & instruction",
                "Advanced teaching methodology for security professionals",
            ],
            verification_link: "https://courses.redteamleaders.com/exam-completion/2c70d277a29cc072",
        },
    ],
};

pub const HOME_EXPERTISE: &[ExpertiseArea] = &[
    ExpertiseArea {
        title: "Red Team Operations",
        description: "Advanced offensive security techniques and adversarial simulations",
    },
    ExpertiseArea {
        title: "Bug Bounty",
        description: "Identifying and reporting critical vulnerabilities across platforms",
    },
    ExpertiseArea {
        title: "Web Security",
        description: "Comprehensive web application security assessments",
    },
];

pub const FOOTER_EXPERTISE: &[ExpertiseArea] = &[
    ExpertiseArea {
        title: "Red Team Operations",
        description: "Advanced offensive security techniques",
    },
    ExpertiseArea {
        title: "Web Security & Bug Bounty",
        description: "Vulnerability identification and reporting",
    },
    ExpertiseArea {
        title: "Ethical Hacking",
        description: "Comprehensive security assessments",
    },
];

pub const VERIFIED_PLATFORMS: &[&str] = &["TryHackMe Verified Rank", "Active Bug Bounty Researcher"];

pub const FOOTER_SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub Security Repositories", url: "https://github.com/InfinityCodder" },
    SocialLink { label: "LinkedIn Professional Profile", url: "https://www.linkedin.com/in/anil-tadvi-238b592a7" },
    SocialLink { label: "Twitter Profile", url: "https://x.com/Nick980076" },
    SocialLink { label: "Medium Blog", url: "https://medium.com/@hack8655793" },
    SocialLink { label: "TryHackMe Profile", url: "https://tryhackme.com/p/GreatestHacker" },
];

pub const CONTACT_SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "LinkedIn", url: "https://www.linkedin.com/in/anil-tadvi-238b592a7" },
    SocialLink { label: "GitHub", url: "https://github.com/InfinityCodder" },
    SocialLink { label: "Twitter", url: "https://x.com/Nick980076" },
];

pub const HERO_SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "LinkedIn", url: "https://www.linkedin.com/in/anil-tadvi-238b592a7" },
    SocialLink { label: "GitHub", url: "https://github.com/nickXploit" },
    SocialLink { label: "Twitter", url: "https://x.com/Nick980076" },
];
