use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github: String,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub customer: String,
    pub rating: i64,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub achievements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub period: String,
    pub gpa: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
}

/// `GET /api/projects` 的回應格式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}

/// `GET /api/resume` 的回應格式；其餘欄位（skills、contact...）忽略
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeResponse {
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    Network,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct PortfolioData {
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub origin: DataOrigin,
}

impl PortfolioData {
    pub fn from_network(projects: ProjectsResponse, resume: ResumeResponse) -> Self {
        Self {
            projects: projects.projects,
            experience: resume.experience,
            education: resume.education,
            origin: DataOrigin::Network,
        }
    }
}
