// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{bearer, create_test_app, create_test_app_with, listing, register_and_login};
use axum::http::StatusCode;
use jobboard::domain::models::job::JobListing;
use jobboard::domain::repositories::job_repository::JobRepository;
use serde_json::{json, Value};

fn titles(body: &Value) -> Vec<String> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap().to_string())
        .collect()
}

/// 远程过滤保持原始顺序
#[tokio::test]
async fn test_list_jobs_remote_filter() {
    let app = create_test_app();

    let response = app.server.get("/api/jobs").add_query_param("remote", "remote").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        titles(&body),
        vec!["Senior Frontend Developer", "UI/UX Designer"]
    );
    assert_eq!(body["totalMatched"], 2);
    assert_eq!(body["page"], 1);
    assert_eq!(body["totalPages"], 1);
}

/// 关键词、类型与远程条件组合
#[tokio::test]
async fn test_list_jobs_combined_filters() {
    let app = create_test_app();

    let response = app
        .server
        .get("/api/jobs")
        .add_query_param("type", "Full-time")
        .add_query_param("remote", "on-site")
        .await;
    response.assert_status_ok();
    assert_eq!(titles(&response.json()), vec!["Backend Engineer"]);

    let response = app
        .server
        .get("/api/jobs")
        .add_query_param("term", "BACKEND")
        .await;
    assert_eq!(titles(&response.json()), vec!["Backend Engineer"]);
}

/// 最新发布排序与无法识别的参数
#[tokio::test]
async fn test_list_jobs_sort_and_unknown_values() {
    let app = create_test_app();

    let response = app
        .server
        .get("/api/jobs")
        .add_query_param("sort", "mostRecent")
        .add_query_param("remote", "whatever")
        .await;

    response.assert_status_ok();
    assert_eq!(
        titles(&response.json()),
        vec![
            "Backend Engineer",
            "UI/UX Designer",
            "Senior Frontend Developer"
        ]
    );
}

/// 分页与超出范围的页码
#[tokio::test]
async fn test_list_jobs_pagination() {
    let listings: Vec<JobListing> = (1..=12)
        .map(|i| {
            listing(
                i,
                &format!("Engineer {}", i),
                "Acme",
                "Remote",
                "Full-time",
                true,
                &[],
                "2025-06-01",
            )
        })
        .collect();
    let app = create_test_app_with(listings);

    let response = app
        .server
        .get("/api/jobs")
        .add_query_param("page", 3)
        .add_query_param("pageSize", 5)
        .await;
    let body: Value = response.json();
    assert_eq!(titles(&body), vec!["Engineer 11", "Engineer 12"]);
    assert_eq!(body["totalPages"], 3);

    let response = app
        .server
        .get("/api/jobs")
        .add_query_param("page", 9)
        .add_query_param("pageSize", 5)
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["items"].as_array().unwrap().is_empty());
    assert_eq!(body["totalMatched"], 12);
}

/// 超出允许范围的 pageSize 返回 400
#[tokio::test]
async fn test_list_jobs_rejects_bad_page_size() {
    let app = create_test_app();

    for size in [0, 51] {
        let response = app
            .server
            .get("/api/jobs")
            .add_query_param("pageSize", size)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_get_job_and_similar() {
    let app = create_test_app();

    let response = app.server.get("/api/jobs/2").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["title"], "Backend Engineer");
    assert_eq!(body["employmentType"], "Full-time");

    let response = app.server.get("/api/jobs/2/similar").await;
    response.assert_status_ok();
    let similar: Vec<Value> = response.json();
    assert_eq!(similar.len(), 1);
    assert_eq!(similar[0]["id"], 1);

    app.server
        .get("/api/jobs/404")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .get("/api/jobs/404/similar")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// 职位管理需要招聘者身份
#[tokio::test]
async fn test_job_management_requires_recruiter() {
    let app = create_test_app();
    let payload = json!({
        "title": "Rust Engineer",
        "company": "Acme",
        "location": "Remote",
        "type": "Full-time",
        "remote": true,
        "salary": "$150,000 - $180,000",
        "salaryMax": 180000,
        "tags": ["Rust", "Tokio"]
    });

    app.server
        .post("/api/jobs")
        .json(&payload)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let developer = register_and_login(&app.server, "dev@example.com", "developer").await;
    app.server
        .post("/api/jobs")
        .add_header("Authorization", bearer(&developer))
        .json(&payload)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    let recruiter = register_and_login(&app.server, "hr@example.com", "recruiter").await;
    let response = app
        .server
        .post("/api/jobs")
        .add_header("Authorization", bearer(&recruiter))
        .json(&payload)
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert_eq!(created["id"], 4);
    assert_eq!(created["applicantCount"], 0);

    let response = app
        .server
        .put("/api/jobs/4")
        .add_header("Authorization", bearer(&recruiter))
        .json(&json!({ "title": "Senior Rust Engineer", "priority": "urgent" }))
        .await;
    response.assert_status_ok();
    let updated: Value = response.json();
    assert_eq!(updated["title"], "Senior Rust Engineer");
    assert_eq!(updated["company"], "Acme");

    // 新职位可以被查询到，薪资排序时排在最前
    let response = app
        .server
        .get("/api/jobs")
        .add_query_param("sort", "salaryDescending")
        .await;
    assert_eq!(titles(&response.json())[0], "Senior Rust Engineer");

    // 显式 null 清空结构化薪资，缺失字段保持不变
    let response = app
        .server
        .put("/api/jobs/4")
        .add_header("Authorization", bearer(&recruiter))
        .json(&json!({ "salaryMax": null }))
        .await;
    response.assert_status_ok();
    let updated: Value = response.json();
    assert!(updated.get("salaryMax").is_none());
    assert_eq!(updated["title"], "Senior Rust Engineer");

    app.server
        .delete("/api/jobs/4")
        .add_header("Authorization", bearer(&recruiter))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    app.server
        .delete("/api/jobs/4")
        .add_header("Authorization", bearer(&recruiter))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_job_validation() {
    let app = create_test_app();
    let recruiter = register_and_login(&app.server, "hr@example.com", "recruiter").await;

    let response = app
        .server
        .post("/api/jobs")
        .add_header("Authorization", bearer(&recruiter))
        .json(&json!({
            "title": " ",
            "company": "Acme",
            "location": "Remote",
            "type": "Full-time",
            "salary": "$1"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("title"));
}

/// 申请职位后申请人数增加，重复申请返回 409
#[tokio::test]
async fn test_apply_flow() {
    let app = create_test_app();
    let token = register_and_login(&app.server, "dev@example.com", "developer").await;

    app.server
        .post("/api/jobs/1/apply")
        .json(&json!({}))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .post("/api/jobs/1/apply")
        .add_header("Authorization", bearer(&token))
        .json(&json!({
            "cover_letter": "I love React.",
            "resume_url": "https://example.com/resume.pdf"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    app.server
        .post("/api/jobs/1/apply")
        .add_header("Authorization", bearer(&token))
        .json(&json!({}))
        .await
        .assert_status(StatusCode::CONFLICT);

    app.server
        .post("/api/jobs/99/apply")
        .add_header("Authorization", bearer(&token))
        .json(&json!({}))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    app.server
        .post("/api/jobs/2/apply")
        .add_header("Authorization", bearer(&token))
        .json(&json!({ "resume_url": "not a url" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let job = app.job_repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(job.applicant_count, 1);

    let response = app
        .server
        .get("/api/applications")
        .add_header("Authorization", bearer(&token))
        .await;
    response.assert_status_ok();
    let applications: Vec<Value> = response.json();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0]["job_id"], 1);
}
