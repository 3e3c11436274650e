/// The portfolio content, authored at compile time.
///
/// Media paths are resolved against the site's public asset directory.
use serde::Serialize;
use tracing::warn;

use crate::error::CommonError;
use crate::model::{
    Achievement, ContactInfo, Education, Media, Profile, Project, SkillCategory, SocialLink,
};

#[derive(Debug, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: &'static [SkillCategory],
    pub projects: &'static [Project],
    pub achievements: &'static [Achievement],
    pub contact: ContactInfo,
}

static PORTFOLIO: Portfolio = Portfolio {
    profile: Profile {
        name: "Sourav Suman",
        headline: "Computer Science Student & Tech Enthusiast",
        roles: &[
            "Computer Science Student",
            "Tech Enthusiast",
            "Web Developer",
            "Machine Learning Explorer",
        ],
        summary: "Pursuing B.Tech in Computer Science with specialization in Data Science at \
                  Manipal University Jaipur. Passionate about Web Development, Machine Learning, and AI.",
        education: Education {
            degree: "B.Tech in Computer Science",
            specialization: "Specialization in Data Science",
            institution: "Manipal University Jaipur",
            period: "2023 - Present",
        },
        background: &[
            "Strong foundation in Computer Science fundamentals",
            "Expertise in Web Development technologies",
            "Experience with Machine Learning and AI projects",
            "Data Science and Analytics skills",
            "Problem-solving and analytical thinking",
        ],
    },
    skills: &[
        SkillCategory {
            title: "Web Development",
            skills: &["React", "Next.js", "TypeScript", "HTML5", "CSS3", "JavaScript", "Tailwind CSS"],
        },
        SkillCategory {
            title: "Machine Learning & AI",
            skills: &["Python", "TensorFlow", "PyTorch", "Scikit-learn", "Natural Language Processing"],
        },
        SkillCategory {
            title: "Data Science",
            skills: &["Data Analysis", "Data Visualization", "Statistical Analysis", "Pandas", "NumPy"],
        },
        SkillCategory {
            title: "Tools & Technologies",
            skills: &["Git", "Docker", "VS Code", "Jupyter Notebook", "SQL"],
        },
    ],
    projects: &[
        Project {
            title: "iPhone Website Clone",
            description: "A pixel-perfect recreation of the Apple iPhone website featuring smooth \
                          animations, 3D models, and responsive design.",
            technologies: &["React", "Tailwind CSS", "Vite", "GSAP", "Three.js"],
            category: "Web Development",
            media: Media::Image { src: "/videos/Screenshot 2025-03-12 151801.png" },
            source_url: "https://github.com/Luciferxy/iPHONE",
        },
        Project {
            title: "Vehicle Detection System",
            description: "Real-time vehicle detection system using YOLO (You Only Look Once) \
                          algorithm for accurate object detection and classification.",
            technologies: &["Python", "YOLO", "OpenCV", "Machine Learning"],
            category: "Machine Learning",
            media: Media::Image { src: "/images/yolov8.jpg" },
            source_url: "https://github.com/Luciferxy/Cars_tracking-_yolov8",
        },
        Project {
            title: "AI Car Driving Algorithm",
            description: "Self-driving car simulation implementing advanced AI algorithms for \
                          autonomous navigation and decision making.",
            technologies: &["Python", "TensorFlow", "Neural Networks", "Simulation"],
            category: "Artificial Intelligence",
            media: Media::Image { src: "/images/ai cars.jpg" },
            source_url: "https://github.com/yourusername/ai-car",
        },
        Project {
            title: "Game Landing Page",
            description: "Dynamic and interactive landing page for a gaming platform with \
                          stunning animations and smooth transitions.",
            technologies: &["React", "Tailwind CSS", "Vite", "GSAP"],
            category: "Web Development",
            media: Media::Image { src: "/images/game landing page.png" },
            source_url: "https://github.com/Luciferxy/3DWebsite_Animation",
        },
        Project {
            title: "AI Email Reply Interface",
            description: "Smart email interface that generates contextual responses using AI, \
                          improving email communication efficiency.",
            technologies: &["AI/ML", "NLP", "React", "API Integration"],
            category: "AI/Web Development",
            media: Media::Video { src: "/videos/email_agent.mp4" },
            source_url: "https://github.com/Luciferxy/AI_Agents",
        },
    ],
    achievements: &[
        Achievement {
            title: "First Place - Innovation and Problem Solving",
            organization: "IEEE Genesis",
            date: "October 5, 2024",
            description: "Secured first position for demonstrating exceptional innovation and \
                          problem-solving skills in developing cutting-edge solutions",
            certificate: Some("/certificates/ieee-genesis.pdf"),
            preview: Some("/certificates/WhatsApp Image 2025-02-25 at 21.20.58_96ab4aa6.jpg"),
        },
        Achievement {
            title: "Third Position",
            organization: "Insitescape 2024",
            date: "November 28-29, 2024",
            description: "Organized by Department of Data Science and Engineering, Manipal \
                          University Jaipur with E-Cell",
            certificate: Some("/certificates/Sourav Suman1.pdf"),
            preview: Some("/certificates/Sourav Suman1_page-0001.jpg"),
        },
    ],
    contact: ContactInfo {
        email: "souravsuman.dps@gmail.com",
        phone: "+91 9142792769",
        location: "Manipal University Jaipur, Rajasthan",
        socials: &[
            SocialLink {
                label: "GitHub",
                url: "https://github.com/Luciferxy",
            },
            SocialLink {
                label: "LinkedIn",
                url: "https://www.linkedin.com/in/sourav-suman-075748240/",
            },
        ],
    },
};

impl Portfolio {
    pub fn get() -> &'static Portfolio {
        &PORTFOLIO
    }

    /// Check the authored content once at startup. Returns the first problem found.
    pub fn validate(&self) -> Result<(), CommonError> {
        if self.profile.name.trim().is_empty() {
            return Err(CommonError::InvalidContent("profile name is empty".to_string()));
        }

        for project in self.projects {
            require_title("project", project.title)?;
            require_asset_path(project.title, project.media.src())?;
            if project.technologies.is_empty() {
                return Err(CommonError::InvalidContent(format!(
                    "project {:?} has no technology tags",
                    project.title
                )));
            }
        }

        for achievement in self.achievements {
            require_title("achievement", achievement.title)?;
            for path in [achievement.preview, achievement.certificate].into_iter().flatten() {
                require_asset_path(achievement.title, path)?;
            }
        }

        for category in self.skills {
            require_title("skill category", category.title)?;
            if category.skills.is_empty() {
                warn!(category = category.title, "skill category has no entries");
            }
        }

        Ok(())
    }
}

fn require_title(kind: &str, title: &str) -> Result<(), CommonError> {
    if title.trim().is_empty() {
        return Err(CommonError::InvalidContent(format!("{kind} with empty title")));
    }
    Ok(())
}

fn require_asset_path(owner: &str, path: &str) -> Result<(), CommonError> {
    if !path.starts_with('/') {
        return Err(CommonError::InvalidContent(format!(
            "{owner:?}: asset path {path:?} must be absolute"
        )));
    }
    Ok(())
}

/// URL for a public asset path. Only spaces need encoding for the paths used here.
pub fn asset_url(path: &str) -> String {
    path.replace(' ', "%20")
}
