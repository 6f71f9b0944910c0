//! # Skills
//!
//! The skills page categories and the home page "Areas of Expertise"
//! highlights. Both are constant tables.

use serde::Serialize;

use crate::icon::Icon;

/// A titled group of skills
#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub skills: &'static [&'static str],
}

/// One expertise card on the landing page
#[derive(Debug, Clone, Serialize)]
pub struct Highlight {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Artificial Intelligence (AI)",
        icon: Icon::OpenAi,
        skills: &[
            "Deep Learning",
            "Natural Language Processing (NLP)",
            "Computer Vision",
            "Reinforcement Learning",
        ],
    },
    SkillCategory {
        title: "Machine Learning (ML)",
        icon: Icon::TensorFlow,
        skills: &[
            "Linear Regression",
            "Logistic Regression",
            "Decision Trees",
            "Random Forest",
            "Support Vector Machine (SVM)",
            "K-Nearest Neighbors (KNN)",
            "Naive Bayes",
            "K-Means Clustering",
            "XGBoost",
        ],
    },
    SkillCategory {
        title: "Programming Languages",
        icon: Icon::Python,
        skills: &["Python", "SQL"],
    },
    SkillCategory {
        title: "Tools & Frameworks",
        icon: Icon::Docker,
        skills: &[
            "Flask",
            "OpenCV",
            "YOLOV8",
            "TensorFlow",
            "Pandas & NumPy",
            "PyTorch",
            "Keras",
            "Scikit-learn",
        ],
    },
    SkillCategory {
        title: "Cloud & DevOps",
        icon: Icon::Cloud,
        skills: &["AWS", "Azure"],
    },
    SkillCategory {
        title: "Data Visualization",
        icon: Icon::Table,
        skills: &["Power BI", "Tableau", "Matplotlib", "Seaborn"],
    },
    SkillCategory {
        title: "Database Management",
        icon: Icon::Database,
        skills: &["MySQL", "MongoDB"],
    },
    SkillCategory {
        title: "Version Control",
        icon: Icon::Git,
        skills: &["GitHub"],
    },
];

const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        name: "Deep Learning",
        description: "Neural Networks & AI Models",
        icon: Icon::Brain,
    },
    Highlight {
        name: "Computer Vision",
        description: "Image Processing & Recognition",
        icon: Icon::Robot,
    },
    Highlight {
        name: "NLP",
        description: "Natural Language Processing",
        icon: Icon::Code,
    },
    Highlight {
        name: "Reinforcement Learning",
        description: "AI for Robotics and Automation",
        icon: Icon::ChartLine,
    },
];

/// Skill categories in display order
pub fn skill_categories() -> &'static [SkillCategory] {
    SKILL_CATEGORIES
}

/// Landing page highlights in display order
pub fn highlights() -> &'static [Highlight] {
    HIGHLIGHTS
}
