//! Driver-level tests over instance files on disk.

use crate::common::{CHAIN, Fixture, TRIANGLE};
use shoal_cli::config::{DriverConfig, ErrorPolicy};
use shoal_cli::{Event, Outcome, process_file};
use shoal_graph::Distance;

fn distances(events: &[Event]) -> Vec<(String, String, Distance)> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Applied {
                outcome: Outcome::Distance { u1, u2, distance },
                ..
            } => Some((u1.clone(), u2.clone(), *distance)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_chain_distances() {
    let fx = Fixture::new();
    let path = fx.file("chain.txt", CHAIN);

    let report = process_file(&path, &DriverConfig::default()).unwrap();
    let got = distances(&report.events);

    assert_eq!(
        got,
        vec![
            ("a".into(), "c".into(), Distance::Hops(2)),
            ("a".into(), "b".into(), Distance::Hops(1)),
            ("a".into(), "a".into(), Distance::Hops(0)),
            ("a".into(), "d".into(), Distance::NoPath),
        ]
    );
    assert_eq!(report.instance_name.as_deref(), Some("Chain"));
}

#[test]
fn test_triangle_with_self_loop() {
    let fx = Fixture::new();
    let path = fx.file("triangle.txt", TRIANGLE);

    let report = process_file(&path, &DriverConfig::default()).unwrap();
    assert!(!report.has_failures());
    assert_eq!(
        distances(&report.events),
        vec![
            ("a".into(), "c".into(), Distance::Hops(1)),
            ("c".into(), "b".into(), Distance::Hops(1)),
        ]
    );
}

#[test]
fn test_files_do_not_share_instances() {
    let fx = Fixture::new();
    let first = fx.file("one.txt", "u a\nu b\nfr a b\n");
    let second = fx.file("two.txt", "u a\nu b\ndq a b\n");

    let config = DriverConfig::default();
    let one = process_file(&first, &config).unwrap();
    let two = process_file(&second, &config).unwrap();

    // Re-registering "a" in the second file is fine, and the friendship from
    // the first file is not visible.
    assert!(!one.has_failures());
    assert!(!two.has_failures());
    assert_eq!(
        distances(&two.events),
        vec![("a".into(), "b".into(), Distance::NoPath)]
    );
}

#[test]
fn test_query_unknown_user_skipped() {
    let fx = Fixture::new();
    let path = fx.file("unknown.txt", "u a\ndq a zed\nu b\ndq b b\n");

    let config = DriverConfig {
        on_error: ErrorPolicy::Skip,
        ..DriverConfig::default()
    };
    let report = process_file(&path, &config).unwrap();

    assert_eq!(report.failures().count(), 1);
    assert!(!report.aborted);
    assert_eq!(
        report.narration(false),
        vec![
            "Added user a.",
            "Failed on line 2 (\"dq a zed\"): Unknown user: zed.",
            "Added user b.",
            "Distance between b and b: 0.",
        ]
    );
}

#[test]
fn test_stats_over_file() {
    let fx = Fixture::new();
    let path = fx.file("chain.txt", CHAIN);

    let config = DriverConfig {
        stats: true,
        ..DriverConfig::default()
    };
    let stats = process_file(&path, &config).unwrap().stats.unwrap();
    assert_eq!(stats.users, 4);
    assert_eq!(stats.friendships, 2);
    assert_eq!(stats.isolated_users, 1);
    assert_eq!(stats.components, 2);
}
