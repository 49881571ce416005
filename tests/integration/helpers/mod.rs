// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use chrono::NaiveDate;
use jobboard::config::settings::{ListingSettings, ListingSource};
use jobboard::domain::models::job::{JobListing, ListingPriority, ListingStatus};
use jobboard::infrastructure::repositories::in_memory_job_repo::InMemoryJobRepository;
use jobboard::presentation::routes::{self, AppServices};
use serde_json::json;
use std::sync::Arc;

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub job_repo: Arc<InMemoryJobRepository>,
}

pub fn listing_settings() -> ListingSettings {
    ListingSettings {
        source: ListingSource::Memory,
        seed_path: None,
        default_page_size: 10,
        max_page_size: 50,
        similar_limit: 4,
    }
}

/// 构造测试职位
#[allow(clippy::too_many_arguments)]
pub fn listing(
    id: u64,
    title: &str,
    company: &str,
    location: &str,
    employment_type: &str,
    remote: bool,
    tags: &[&str],
    posted: &str,
) -> JobListing {
    JobListing {
        id,
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        employment_type: employment_type.to_string(),
        is_remote: remote,
        salary_range: "$100,000 - $120,000".to_string(),
        salary_max: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        posted_at: NaiveDate::parse_from_str(posted, "%Y-%m-%d").unwrap(),
        applicant_count: 0,
        description: String::new(),
        responsibilities: vec![],
        requirements: vec![],
        status: ListingStatus::Active,
        priority: ListingPriority::Normal,
        company_logo: None,
    }
}

pub fn fixture() -> Vec<JobListing> {
    vec![
        listing(
            1,
            "Senior Frontend Developer",
            "TechCorp Inc.",
            "San Francisco, CA",
            "Full-time",
            true,
            &["React", "TypeScript"],
            "2025-06-10",
        ),
        listing(
            2,
            "Backend Engineer",
            "DataFlow Systems",
            "Austin, TX",
            "Full-time",
            false,
            &["Rust", "PostgreSQL"],
            "2025-06-18",
        ),
        listing(
            3,
            "UI/UX Designer",
            "StartupCo",
            "Remote",
            "Contract",
            true,
            &["Figma"],
            "2025-06-14",
        ),
    ]
}

pub fn create_test_app() -> TestApp {
    create_test_app_with(fixture())
}

pub fn create_test_app_with(listings: Vec<JobListing>) -> TestApp {
    let job_repo = Arc::new(InMemoryJobRepository::new(listings));
    let services = AppServices::new(
        job_repo.clone(),
        listing_settings(),
        chrono::Duration::hours(1),
    );
    let server = TestServer::new(routes::app(services)).unwrap();

    TestApp { server, job_repo }
}

/// 注册并登录，返回访问令牌
pub async fn register_and_login(server: &TestServer, email: &str, role: &str) -> String {
    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "name": "Test User",
            "email": email,
            "password": "password123",
            "role": role,
            "bio": "Writes software"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": email, "password": "password123" }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    body["access_token"].as_str().unwrap().to_string()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
