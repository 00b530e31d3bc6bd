//! Integration tests for feed communication
//!
//! These tests verify:
//! - Probe classification against a live HTTP responder
//! - OData paging and filtering over the wire
//! - The lister workflow end to end with real files

mod common;

use common::{light_page, refused_url, verbose_page, TestServer};
use nuget_feed_tools::console::Console;
use nuget_feed_tools::domain::QueryFilter;
use nuget_feed_tools::error::FeedError;
use nuget_feed_tools::feed::{self, FeedClient, HttpClient, ODataFeedClient, ProbeOutcome};
use nuget_feed_tools::workflow::{run_lister, ListerSettings, RunOutcome};
use std::io::Cursor;
use std::time::Duration;

fn feed_client() -> ODataFeedClient {
    let http = HttpClient::with_config(Some(Duration::from_secs(10)), "nuget-feed-tools-tests")
        .unwrap();
    ODataFeedClient::new(http)
}

mod probe {
    use super::*;

    #[tokio::test]
    async fn test_not_found_is_unreachable() {
        let server = TestServer::start(|_, _| (404, String::new())).await;
        let outcome = feed_client().probe(&server.url("nuget")).await;
        assert_eq!(outcome, ProbeOutcome::Unreachable);
        assert_eq!(server.requests(), vec!["HEAD /nuget HTTP/1.1".to_string()]);
    }

    #[tokio::test]
    async fn test_ok_and_server_error_are_reachable() {
        let server = TestServer::start(|_, target| {
            if target.starts_with("/broken") {
                (500, String::new())
            } else {
                (200, String::new())
            }
        })
        .await;
        let client = feed_client();

        assert!(client.probe(&server.url("nuget")).await.is_reachable());
        assert!(client.probe(&server.url("broken")).await.is_reachable());
    }

    #[tokio::test]
    async fn test_redirect_is_not_followed() {
        let server = TestServer::start(|_, _| (301, String::new())).await;
        let outcome = feed_client().probe(&server.url("nuget")).await;
        assert_eq!(outcome, ProbeOutcome::Reachable);
        assert_eq!(server.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_connection_refused_is_probe_error() {
        let outcome = feed_client().probe(&refused_url()).await;
        match outcome {
            ProbeOutcome::ProbeError { kind, message } => {
                assert_eq!(kind, "connect");
                assert!(!message.is_empty());
            }
            other => panic!("expected a probe error, got {:?}", other),
        }
    }
}

mod query {
    use super::*;

    #[tokio::test]
    async fn test_list_packages_follows_next_links() {
        let server = TestServer::start(|_, target| {
            if target.contains("skip=2") {
                (200, verbose_page(&[("C", "3.0.0")], None))
            } else if target.starts_with("/nuget/Packages()") {
                let page = verbose_page(
                    &[("A", "1.0.0"), ("B", "2.0.0")],
                    Some("Packages()?$skip=2"),
                );
                (200, page)
            } else {
                (404, String::new())
            }
        })
        .await;

        let packages = feed::query(&feed_client(), &server.url("nuget"), &QueryFilter::unfiltered())
            .await
            .unwrap();

        let listed: Vec<String> = packages.iter().map(|p| p.to_string()).collect();
        assert_eq!(listed, vec!["A 1.0.0", "B 2.0.0", "C 3.0.0"]);
        assert_eq!(server.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_next_link_cycle_is_invalid_response() {
        let server = TestServer::start(|_, target| {
            if target.contains("page=b") {
                (200, verbose_page(&[("B", "2.0.0")], Some("Packages()?page=a")))
            } else if target.starts_with("/nuget/Packages()") {
                (200, verbose_page(&[("A", "1.0.0")], Some("Packages()?page=b")))
            } else {
                (404, String::new())
            }
        })
        .await;

        let queried = tokio::time::timeout(
            Duration::from_secs(5),
            feed::query(&feed_client(), &server.url("nuget"), &QueryFilter::unfiltered()),
        )
        .await
        .expect("paging stops at the first repeated page");

        let err = queried.unwrap_err();
        assert_eq!(err.kind(), "invalid-response");
        assert!(err.to_string().contains("page=a"));
        assert_eq!(server.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_filtered_query_uses_find_packages_by_id() {
        let server = TestServer::start(|_, target| {
            if target.starts_with("/api/v2/FindPackagesById()") {
                (
                    200,
                    light_page(&[("Foo", "1.0.0"), ("Foo", "1.1.0-beta"), ("Foo", "2.0.0")]),
                )
            } else {
                (404, String::new())
            }
        })
        .await;

        let packages = feed::query(
            &feed_client(),
            &server.url("api/v2/"),
            &QueryFilter::new("foo"),
        )
        .await
        .unwrap();

        assert_eq!(packages.len(), 3);
        assert!(packages.iter().any(|p| p.version == "1.1.0-beta"));

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].contains("id=%27foo%27"), "request: {}", requests[0]);
    }

    #[tokio::test]
    async fn test_server_error_is_status_error() {
        let server = TestServer::start(|_, _| (500, "oops".to_string())).await;

        let err = feed::query(&feed_client(), &server.url("nuget"), &QueryFilter::unfiltered())
            .await
            .unwrap_err();

        assert!(matches!(err, FeedError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_non_odata_body_is_invalid_response() {
        let server = TestServer::start(|_, _| (200, "<html></html>".to_string())).await;

        let err = feed::query(&feed_client(), &server.url("nuget"), &QueryFilter::unfiltered())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "invalid-response");
    }
}

mod lister_workflow {
    use super::*;

    #[tokio::test]
    async fn test_lists_feed_and_writes_files() {
        let server = TestServer::start(|method, target| {
            if method == "HEAD" {
                (200, String::new())
            } else if target.starts_with("/nuget/Packages()") {
                (200, verbose_page(&[("A", "1.0.0"), ("B", "2.0.0")], None))
            } else {
                (404, String::new())
            }
        })
        .await;
        let output_dir = tempfile::tempdir().unwrap();
        let settings = ListerSettings {
            output_dir: output_dir.path().to_path_buf(),
            show_progress: false,
        };
        let input = format!("{}\n\n\n", server.url("nuget"));
        let mut console =
            Console::new(Cursor::new(input.into_bytes()), Vec::new()).with_color(false);

        let outcome = run_lister(&mut console, &feed_client(), &settings)
            .await
            .unwrap();

        assert_eq!(outcome, RunOutcome::Completed);
        let out = String::from_utf8(console.writer().clone()).unwrap();
        assert!(out.contains(" * A 1.0.0"));
        assert!(out.contains("2 package/s were found."));

        let mut names: Vec<String> = std::fs::read_dir(output_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names.len(), 2);
        assert!(names[0].starts_with("packages-list-at-") && names[0].ends_with(".csv"));
        assert!(names[1].starts_with("packages-list-at-") && names[1].ends_with(".txt"));

        let csv = std::fs::read_to_string(output_dir.path().join(&names[0])).unwrap();
        assert_eq!(csv, "A 1.0.0,B 2.0.0");
        let text = std::fs::read_to_string(output_dir.path().join(&names[1])).unwrap();
        assert_eq!(text, "A 1.0.0\r\nB 2.0.0");
    }

    #[tokio::test]
    async fn test_unreachable_feed_halts_without_querying() {
        let server = TestServer::start(|_, _| (404, String::new())).await;
        let output_dir = tempfile::tempdir().unwrap();
        let settings = ListerSettings {
            output_dir: output_dir.path().to_path_buf(),
            show_progress: false,
        };
        let input = format!("{}\n\n", server.url("missing"));
        let mut console =
            Console::new(Cursor::new(input.into_bytes()), Vec::new()).with_color(false);

        let outcome = run_lister(&mut console, &feed_client(), &settings)
            .await
            .unwrap();

        assert_eq!(outcome, RunOutcome::Halted);
        assert!(server.requests().iter().all(|r| r.starts_with("HEAD ")));
        assert_eq!(std::fs::read_dir(output_dir.path()).unwrap().count(), 0);
    }
}
