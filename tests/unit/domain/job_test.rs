// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use jobboard::domain::models::job::{
    JobListing, JobListingPatch, ListingPriority, ListingStatus, DEFAULT_TAG_PREVIEW,
};
use serde_json::json;

fn sample() -> JobListing {
    serde_json::from_value(json!({
        "id": 1,
        "title": "Senior Frontend Developer",
        "company": "TechCorp Inc.",
        "location": "San Francisco, CA",
        "type": "Full-time",
        "remote": true,
        "salary": "$120,000 - $160,000",
        "tags": ["React", "TypeScript", "GraphQL", "Tailwind", "Jest", "Vite"],
        "postedDate": "2025-06-15"
    }))
    .unwrap()
}

#[test]
fn test_deserialize_accepts_short_field_names() {
    let job = sample();
    assert_eq!(job.employment_type, "Full-time");
    assert!(job.is_remote);
    assert_eq!(job.salary_range, "$120,000 - $160,000");
    assert_eq!(job.applicant_count, 0);
    assert_eq!(job.status, ListingStatus::Open);
    assert_eq!(job.priority, ListingPriority::Normal);
}

#[test]
fn test_serialize_uses_camel_case() {
    let value = serde_json::to_value(sample()).unwrap();
    assert_eq!(value["employmentType"], "Full-time");
    assert_eq!(value["isRemote"], true);
    assert_eq!(value["postedAt"], "2025-06-15");
    assert_eq!(value["status"], "open");
    assert!(value.get("salaryMax").is_none());
}

#[test]
fn test_tag_preview() {
    let job = sample();

    let preview = job.tag_preview(DEFAULT_TAG_PREVIEW);
    assert_eq!(preview.visible, &job.tags[..4]);
    assert_eq!(preview.hidden_count, 2);

    let preview = job.tag_preview(10);
    assert_eq!(preview.visible.len(), 6);
    assert_eq!(preview.hidden_count, 0);
}

#[test]
fn test_status_label_prefers_urgent() {
    let mut job = sample();
    assert_eq!(job.status_label(), "Open");

    job.status = ListingStatus::ClosingSoon;
    assert_eq!(job.status_label(), "Closing Soon");

    job.priority = ListingPriority::Urgent;
    assert_eq!(job.status_label(), "Urgent");
}

#[test]
fn test_patch_only_touches_present_fields() {
    let mut job = sample();
    JobListingPatch {
        location: Some("Remote".to_string()),
        salary_max: Some(Some(160_000)),
        ..Default::default()
    }
    .apply(&mut job);

    assert_eq!(job.location, "Remote");
    assert_eq!(job.salary_max, Some(160_000));
    assert_eq!(job.title, "Senior Frontend Developer");
    assert_eq!(job.tags.len(), 6);
}

#[test]
fn test_patch_can_clear_optional_fields() {
    let mut job = sample();
    job.salary_max = Some(160_000);
    job.company_logo = Some("https://example.com/logo.png".to_string());

    JobListingPatch::default().apply(&mut job);
    assert_eq!(job.salary_max, Some(160_000));
    assert!(job.company_logo.is_some());

    JobListingPatch {
        salary_max: Some(None),
        company_logo: Some(None),
        ..Default::default()
    }
    .apply(&mut job);
    assert_eq!(job.salary_max, None);
    assert_eq!(job.company_logo, None);
}
