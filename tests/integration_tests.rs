use httpmock::prelude::*;
use portfolio_content::core::site::render_site;
use portfolio_content::{CliConfig, LocalStorage, PortfolioError};
use tempfile::TempDir;

fn projects_body() -> serde_json::Value {
    serde_json::json!({
        "projects": [
            {
                "title": "Rust Crawler",
                "description": "Concurrent crawler <fast>",
                "technologies": ["Rust", "Tokio"],
                "github": "https://github.com/example/crawler",
                "demo": "https://crawler.example.com",
                "image": "/images/crawler.png",
                "features": ["Async fetch", "Politeness delays"]
            },
            {
                "title": "FastAPI Portfolio Website",
                "description": "This site",
                "technologies": ["Python"],
                "github": "https://github.com/example/site",
                "demo": "https://www.example.com",
                "features": ["Templates"]
            }
        ]
    })
}

fn resume_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Someone",
        "experience": [
            {
                "title": "Moving Crew Lead & Operations Coordinator",
                "company": "Out The Door Moving",
                "location": "Conroe, TX",
                "period": "June 2022 - March 2023",
                "achievements": ["Led crews"],
                "reviews": [
                    {"customer": "Ana", "rating": 5, "comment": "Careful and quick"},
                    {"customer": "Bo", "rating": 4, "comment": "Good work"}
                ]
            }
        ],
        "education": [
            {
                "institution": "Southern New Hampshire University",
                "degree": "Bachelor of Science in Computer Science",
                "period": "2023 - Present",
                "gpa": "3.9",
                "status": "In Progress"
            }
        ]
    })
}

fn config(api_base_url: String, output_path: String) -> CliConfig {
    CliConfig {
        api_base_url,
        output_path,
        host_page: None,
        contact_email: "me@example.com".to_string(),
        offline: false,
        verbose: false,
    }
}

fn read_page(output_path: &str) -> String {
    std::fs::read_to_string(std::path::Path::new(output_path).join("index.html")).unwrap()
}

#[tokio::test]
async fn test_end_to_end_render_with_real_http() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let projects_mock = server.mock(|when, then| {
        when.method(GET).path("/api/projects");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(projects_body());
    });
    let resume_mock = server.mock(|when, then| {
        when.method(GET).path("/api/resume");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(resume_body());
    });

    let storage = LocalStorage::new(output_path.clone());
    let result = render_site(&config(server.base_url(), output_path.clone()), storage).await;

    projects_mock.assert();
    resume_mock.assert();
    assert!(result.unwrap().ends_with("index.html"));

    let page = read_page(&output_path);
    assert_eq!(page.matches(r#"class="card-title text-gradient""#).count(), 2);
    assert_eq!(page.matches(r#"class="experience-card""#).count(), 1);
    assert_eq!(page.matches(r#"class="education-card""#).count(), 1);

    // 內容一律轉義
    assert!(page.contains("Concurrent crawler &lt;fast&gt;"));
    assert!(page.contains("/projects/rust-crawler"));
    assert!(page.contains("/projects/fastapi-portfolio"));

    // 自身網站不顯示 Live Demo
    assert_eq!(page.matches("project-demo").count(), 1);

    // 評論區顯示，且只有第一張為 active
    assert_eq!(page.matches(r#"class="carousel-item active""#).count(), 1);
    assert_eq!(page.matches(r#"class="carousel-item""#).count(), 1);
    assert!(page.contains(r#"<section id="reviews-section" class="reviews">"#));
}

#[tokio::test]
async fn test_server_error_renders_fallback_content() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/projects");
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/resume");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(resume_body());
    });

    let storage = LocalStorage::new(output_path.clone());
    render_site(&config(server.base_url(), output_path.clone()), storage)
        .await
        .unwrap();

    // resume 成功也不混用，整頁改用內建資料
    let page = read_page(&output_path);
    assert_eq!(page.matches(r#"class="card-title text-gradient""#).count(), 5);
    assert_eq!(page.matches(r#"class="experience-card""#).count(), 3);
    assert_eq!(page.matches(r#"class="education-card""#).count(), 2);
    assert_eq!(page.matches(r#"class="carousel-item"#).count(), 5);
    assert!(!page.contains("Rust Crawler"));
}

#[tokio::test]
async fn test_malformed_json_renders_fallback_content() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/projects");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("{\"projects\": [");
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/resume");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(resume_body());
    });

    let storage = LocalStorage::new(output_path.clone());
    render_site(&config(server.base_url(), output_path.clone()), storage)
        .await
        .unwrap();

    let page = read_page(&output_path);
    assert_eq!(page.matches(r#"class="experience-card""#).count(), 3);
    assert!(page.contains("/projects/mcp"));
}

#[tokio::test]
async fn test_missing_host_element_aborts_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("dist").to_str().unwrap().to_string();
    let host_path = temp_dir.path().join("host.html");
    std::fs::write(
        &host_path,
        r#"<main><div id="projects-container"></div><div id="experience-container"></div></main>"#,
    )
    .unwrap();

    let mut config = config("http://127.0.0.1:1".to_string(), output_path.clone());
    config.host_page = Some(host_path.to_str().unwrap().to_string());

    let storage = LocalStorage::new(output_path.clone());
    let err = render_site(&config, storage).await.unwrap_err();

    match err {
        PortfolioError::MissingElementError { id } => assert_eq!(id, "education-container"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!std::path::Path::new(&output_path).join("index.html").exists());
}
