// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::io::Write as _;

use assert_matches::assert_matches;
use employee_search::{EmployeeSearchConfig, RangeBucketBounds};
use employee_search_cli::CLIError;
use employee_search_cli::config::*;
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_file_config_is_merged_over_defaults() {
    let file = write_config(indoc::indoc!(
        r#"
        search:
          indexName: staff
          rangeBucketBounds: stepped
          elasticsearch:
            hosts:
              - http://es-1:9200
              - http://es-2:9200
            username: elastic
            password: secret
        "#
    ));

    let config = ConfigService::new(Some(file.path().to_path_buf()))
        .load()
        .unwrap();

    let search = config.search.as_ref().unwrap();
    assert_eq!(
        search.to_employee_search_config(),
        EmployeeSearchConfig {
            index_name: "staff".to_string(),
            range_bucket_bounds: RangeBucketBounds::Stepped,
        }
    );

    let es = search.elasticsearch.as_ref().unwrap().to_client_config();
    assert_eq!(
        es.hosts.iter().map(url::Url::as_str).collect::<Vec<_>>(),
        vec!["http://es-1:9200/", "http://es-2:9200/"]
    );
    assert_eq!(es.username.as_deref(), Some("elastic"));
    assert_eq!(es.password.as_deref(), Some("secret"));
    assert_eq!(es.timeout_secs, 30);
    assert!(!es.enable_compression);
}

#[test]
fn test_empty_file_yields_defaults() {
    let file = write_config("");

    let config = ConfigService::new(Some(file.path().to_path_buf()))
        .load()
        .unwrap();

    assert_eq!(config, CLIConfig::default());
    assert_eq!(
        config.search.unwrap().to_employee_search_config(),
        EmployeeSearchConfig::default()
    );
}

#[test]
fn test_partial_nested_config() {
    let mut config = ConfigService::parse(indoc::indoc!(
        r#"
        search:
          elasticsearch:
            timeoutSecs: 5
        "#
    ))
    .unwrap();

    assert_eq!(config.search.as_ref().unwrap().index_name, None);

    merge::Merge::merge(&mut config, CLIConfig::default());

    let search = config.search.unwrap();
    assert_eq!(search.index_name.as_deref(), Some("employees"));
    assert_eq!(search.range_bucket_bounds, Some(RangeBucketBounds::Pinned));

    let es = search.elasticsearch.unwrap();
    assert_eq!(es.timeout_secs, Some(5));
    assert_eq!(es.enable_compression, Some(false));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_unknown_fields_are_rejected() {
    assert!(ConfigService::parse("search:\n  indexNam: staff\n").is_err());
    assert!(ConfigService::parse("searc: {}\n").is_err());

    let file = write_config("search:\n  rangeBucketBounds: sideways\n");
    assert_matches!(
        ConfigService::new(Some(file.path().to_path_buf())).load(),
        Err(CLIError::UsageError { .. })
    );
}

#[test]
fn test_missing_explicit_config_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    assert_matches!(
        ConfigService::new(Some(dir.path().join("absent.yaml"))).load(),
        Err(CLIError::UsageError { .. })
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_masked_config() {
    let mut config = CLIConfig::default();
    config
        .search
        .as_mut()
        .unwrap()
        .elasticsearch
        .as_mut()
        .unwrap()
        .password = Some("secret".to_string());

    let yaml = ConfigService::to_yaml(&config.masked()).unwrap();

    assert!(!yaml.contains("secret"), "{yaml}");
    assert!(yaml.contains("********"), "{yaml}");
    assert!(yaml.contains("indexName: employees"), "{yaml}");

    let unmasked = ConfigService::to_yaml(&config).unwrap();
    assert!(unmasked.contains("password: secret"), "{unmasked}");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
