//! 後端無法使用時的內建資料，結構與 API 回應相同。

use crate::domain::model::{
    DataOrigin, EducationEntry, ExperienceEntry, PortfolioData, Project, Review,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn project(
    title: &str,
    description: &str,
    technologies: &[&str],
    github: &str,
    demo: Option<&str>,
    image: &str,
    features: &[&str],
) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        technologies: strings(technologies),
        github: github.to_string(),
        demo: demo.map(str::to_string),
        image: Some(image.to_string()),
        features: strings(features),
    }
}

fn review(customer: &str, rating: i64, comment: &str) -> Review {
    Review {
        customer: customer.to_string(),
        rating,
        comment: comment.to_string(),
    }
}

pub fn fallback_projects() -> Vec<Project> {
    vec![
        project(
            "Python FastAPI MCP Appointment Manager (AI Integration)",
            "Intelligent appointment management backend built with FastAPI and PostgreSQL, containerized with Docker and integrated with Claude via Model Context Protocol (MCP). This project demonstrates how artificial intelligence can directly interact with a backend system to create, list, update, and delete appointments.",
            &["Python", "FastAPI", "PostgreSQL", "Docker", "MCP", "Claude", "Artificial Intelligence"],
            "https://github.com/Samuelr2112/mcp-project",
            None,
            "/images/project5.png",
            &[
                "AI-powered appointment management with Claude",
                "CRUD operations with FastAPI + PostgreSQL",
                "Containerized deployment with Docker Compose",
                "Model Context Protocol (MCP) integration",
                "Swagger UI for live API testing",
            ],
        ),
        project(
            "Java Spring Boot Task Manager",
            "Enterprise-level task and appointment management system built with Spring Boot. Provides comprehensive CRUD operations, RESTful API design, and a maintainable layered architecture. Endpoints tested directly from the command line using cURL.",
            &["Java", "Spring Boot", "REST API", "OOP", "Maven"],
            "https://github.com/Samuelr2112/Task-and-Appointment-Management-System-with-Java",
            None,
            "/images/project4.png",
            &[
                "Complete REST API with CRUD operations",
                "Command-line testing with cURL",
                "Layered architecture with separation of concerns",
                "Future-ready for validation, unit testing, and database integration",
            ],
        ),
        project(
            "Binary Search Tree Data Parser",
            "Command-line application implementing custom Binary Search Tree for efficient sales data parsing and analysis. Demonstrates advanced data structures and algorithm implementation.",
            &["Python", "Data Structures", "Algorithms", "CSV"],
            "https://github.com/Samuelr2112/Python-Sales-Data-BST-Parser",
            None,
            "/images/project3.png",
            &[
                "Custom BST implementation",
                "Efficient data parsing",
                "Interactive CLI",
                "CSV processing capabilities",
            ],
        ),
        project(
            "SQL Inventory Management System",
            "Full-featured inventory tracking system with SQL database integration. Features both command-line interface and web dashboard for comprehensive inventory management.",
            &["Python", "SQLite", "SQL", "Flask", "HTML/CSS"],
            "https://github.com/Samuelr2112/Inventory-Tracker-with-SQLite-and-Python",
            None,
            "/images/project1.png",
            &[
                "Full CRUD operations with SQL",
                "Web interface with Flask",
                "Database schema design",
                "Inventory reporting",
            ],
        ),
        project(
            "FastAPI Portfolio Website",
            "This modern, responsive portfolio website built with FastAPI backend and vanilla JavaScript frontend. Deployed on AWS with professional design and smooth animations.",
            &["Python", "FastAPI", "HTML/CSS", "JavaScript", "Bootstrap", "AWS"],
            "https://github.com/Samuelr2112/portfolio-website",
            Some("https://www.samuelrincon.online"),
            "/images/project2.png",
            &[
                "Professional responsive design",
                "FastAPI REST API backend",
                "Contact form with email integration",
                "AWS Lightsail deployment",
            ],
        ),
    ]
}

pub fn fallback_experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            title: "Online Grocery Associate & In-Home Delivery Driver".to_string(),
            company: "Walmart".to_string(),
            location: "The Woodlands, TX".to_string(),
            period: "March 2023 - Present".to_string(),
            achievements: strings(&[
                "Delivered customer orders while maintaining a friendly, respectful, and professional relationship with clients.",
                "Worked under time pressure to meet strict deadlines and ensure efficient order fulfillment.",
                "Managed TC devices and backroom operations using the GIF software system for inventory control and organization.",
            ]),
            reviews: None,
        },
        ExperienceEntry {
            title: "Moving Crew Lead & Operations Coordinator".to_string(),
            company: "Out The Door Moving".to_string(),
            location: "Conroe, TX".to_string(),
            period: "June 2022 - March 2023".to_string(),
            achievements: strings(&[
                "Led teams of 2-6 movers with 100% customer satisfaction",
                "Implemented efficient logistics reducing move time by 20%",
                "Trained 12+ new team members on safety protocols",
            ]),
            reviews: Some(vec![
                review("Michael Coleman", 5, "Samuel and Kevin were exactly the help we needed. They took very good care of our possessions and were very professional."),
                review("Janese Sokulski", 5, "Enjoyed the attitude of these young men and they did an excellent job. On time and worked very hard. Highly recommend this group Samuel, Jony, Gabriel, Juan and Jose."),
                review("Irene Patricia Regalo Estrada", 5, "We had the pleasure of having Samuel, Kevin and Juan move us to our new home. Very respectful, efficient, and quick. They also made sure not to damage any of our items."),
                review("Rebecca Stone", 5, "Samuel and Marcelo were so polite and moved so quickly! I was very pleased with their work. Would hire them again for sure!"),
                review("Barraque Monfils-Evangelista", 5, "Samuel and Daniel were quick, efficient, and patient when we had to wait at the storage unit. I recommend requesting them by name."),
            ]),
        },
        ExperienceEntry {
            title: "Web & Systems Assistant (Part-Time)".to_string(),
            company: "Aldea Music Corp".to_string(),
            location: "The Woodlands, TX".to_string(),
            period: "March 2022 – Present".to_string(),
            achievements: strings(&[
                "Managed and maintained the company's HTML-based online receipt system",
                "Provided updates and light maintenance for the company website",
                "Assisted with digital record-keeping and ensuring smooth operation of online systems",
            ]),
            reviews: None,
        },
    ]
}

pub fn fallback_education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            institution: "Southern New Hampshire University".to_string(),
            degree: "Bachelor of Science in Computer Science".to_string(),
            period: "May 2023 - March 2025".to_string(),
            gpa: "3.69".to_string(),
            status: "Graduated".to_string(),
            focus: Some("Backend Development, API Design, Database Management".to_string()),
            achievements: Some(strings(&[
                "Multiple honors and certificates for outstanding performance",
                "Merit recognition available at meritpages.com/samuelrincon",
            ])),
        },
        EducationEntry {
            institution: "Lone Star College".to_string(),
            degree: "Associate of Arts".to_string(),
            period: "August 2019 – May 2022".to_string(),
            gpa: "3.75".to_string(),
            status: "Graduated".to_string(),
            focus: None,
            achievements: None,
        },
    ]
}

pub fn fallback_data() -> PortfolioData {
    PortfolioData {
        projects: fallback_projects(),
        experience: fallback_experience(),
        education: fallback_education(),
        origin: DataOrigin::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::slug::project_slug;

    #[test]
    fn test_fallback_dataset_sizes() {
        let data = fallback_data();
        assert_eq!(data.projects.len(), 5);
        assert_eq!(data.experience.len(), 3);
        assert_eq!(data.education.len(), 2);
        assert_eq!(data.origin, DataOrigin::Fallback);
    }

    #[test]
    fn test_only_crew_lead_carries_reviews() {
        let experience = fallback_experience();
        let with_reviews: Vec<_> = experience
            .iter()
            .filter(|job| job.reviews.is_some())
            .collect();
        assert_eq!(with_reviews.len(), 1);
        assert_eq!(with_reviews[0].title, "Moving Crew Lead & Operations Coordinator");
        assert_eq!(with_reviews[0].reviews.as_ref().unwrap().len(), 5);
    }

    #[test]
    fn test_every_fallback_project_has_a_mapped_slug() {
        let slugs: Vec<String> = fallback_projects()
            .iter()
            .map(|p| project_slug(&p.title).into_owned())
            .collect();
        assert_eq!(
            slugs,
            vec![
                "mcp-appointment-manager",
                "springboot-task-manager",
                "bst-parser",
                "inventory-tracker",
                "fastapi-portfolio",
            ]
        );
    }
}
