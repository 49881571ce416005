// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use jobboard::domain::models::query::{QueryParameters, RemoteFilter};
use jobboard::domain::repositories::job_repository::{JobRepository, RepositoryError};
use jobboard::infrastructure::repositories::http_job_repo::HttpJobRepository;
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

fn upstream_job(id: u64, title: &str, remote: bool) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "company": "Acme",
        "location": "Austin, TX",
        "type": "Full-time",
        "remote": remote,
        "salary": "$120,000",
        "tags": ["Rust"],
        "postedDate": "2025-06-18",
        "applicantCount": 2
    })
}

async fn repo(server: &MockServer) -> HttpJobRepository {
    HttpJobRepository::new(
        &format!("{}/api", server.uri()),
        Duration::from_secs(5),
        Some("upstream-secret".to_string()),
    )
    .unwrap()
}

#[tokio::test]
async fn test_find_all_and_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .and(header("Authorization", "Bearer upstream-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            upstream_job(1, "Rust Engineer", true),
            upstream_job(2, "Go Engineer", false),
        ])))
        .mount(&server)
        .await;

    let repo = repo(&server).await;
    let page = repo
        .list_jobs(&QueryParameters::new().with_remote(RemoteFilter::Remote))
        .await
        .unwrap();

    assert_eq!(page.total_matched, 1);
    assert_eq!(page.items[0].title, "Rust Engineer");
    assert_eq!(page.items[0].applicant_count, 2);
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/7"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let repo = repo(&server).await;
    assert!(repo.find_by_id(7).await.unwrap().is_none());
    assert!(matches!(
        repo.increment_applicants(7).await,
        Err(RepositoryError::NotFound)
    ));
}

#[tokio::test]
async fn test_increment_applicants_puts_updated_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(upstream_job(1, "Rust Engineer", true)),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/jobs/1"))
        .and(body_partial_json(json!({ "applicantCount": 3 })))
        .respond_with(ResponseTemplate::new(200).set_body_json({
            let mut job = upstream_job(1, "Rust Engineer", true);
            job["applicantCount"] = json!(3);
            job
        }))
        .expect(1)
        .mount(&server)
        .await;

    let repo = repo(&server).await;
    repo.increment_applicants(1).await.unwrap();
}

/// 保存申请人数的上游职位：读请求返回当前值，写请求保存请求体中的值
#[derive(Clone)]
struct StoredJob {
    applicants: Arc<AtomicU64>,
    write: bool,
}

impl StoredJob {
    fn current(&self) -> serde_json::Value {
        let mut job = upstream_job(1, "Rust Engineer", true);
        job["applicantCount"] = json!(self.applicants.load(Ordering::SeqCst));
        job
    }
}

impl Respond for StoredJob {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        if self.write {
            let body: serde_json::Value = match serde_json::from_slice(&request.body) {
                Ok(body) => body,
                Err(_) => return ResponseTemplate::new(400),
            };
            let count = body["applicantCount"].as_u64().unwrap_or(0);
            self.applicants.store(count, Ordering::SeqCst);
            return ResponseTemplate::new(200).set_body_json(self.current());
        }
        ResponseTemplate::new(200)
            .set_body_json(self.current())
            .set_delay(Duration::from_millis(20))
    }
}

#[tokio::test]
async fn test_concurrent_increments_are_not_lost() {
    let server = MockServer::start().await;
    let stored = StoredJob {
        applicants: Arc::new(AtomicU64::new(0)),
        write: false,
    };
    Mock::given(method("GET"))
        .and(path("/api/jobs/1"))
        .respond_with(stored.clone())
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/jobs/1"))
        .respond_with(StoredJob {
            write: true,
            ..stored.clone()
        })
        .expect(8)
        .mount(&server)
        .await;

    let repo = Arc::new(repo(&server).await);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.increment_applicants(1).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(stored.applicants.load(Ordering::SeqCst), 8);
}

#[tokio::test]
async fn test_delete_and_upstream_errors() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/jobs/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/jobs/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let repo = repo(&server).await;
    assert!(repo.delete(1).await.unwrap());
    assert!(!repo.delete(2).await.unwrap());
    assert!(matches!(
        repo.find_all().await,
        Err(RepositoryError::Upstream(_))
    ));
}

#[test]
fn test_invalid_base_url() {
    let result = HttpJobRepository::new("not a url", Duration::from_secs(1), None);
    assert!(matches!(result, Err(RepositoryError::InvalidUpstreamUrl(_))));
}
