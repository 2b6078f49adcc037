use super::*;

#[test]
fn parses_dashboard_with_defaults() {
    let cli = Cli::try_parse_from(["adsdash", "dashboard"]).expect("expected valid cli args");

    match cli.command {
        Commands::Dashboard(query) => {
            assert_eq!(query.range, DateRange::Last30Days);
            assert_eq!(query.platform, PlatformFilter::All);
            assert!(query.api_key.is_none());
            assert!(query.project.is_none());
        }
        other => panic!("expected dashboard command, got {other:?}"),
    }
}

#[test]
fn parses_summary_filters() {
    let cli = Cli::try_parse_from([
        "adsdash",
        "summary",
        "--range",
        "last_7d",
        "--platform",
        "Facebook",
        "--project",
        "acme",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Summary(QueryArgs {
            range: DateRange::Last7Days,
            platform: PlatformFilter::Facebook,
            project: Some(ref p),
            ..
        }) if p == "acme"
    ));
}

#[test]
fn parses_export_output_path() {
    let cli = Cli::try_parse_from(["adsdash", "export", "-o", "report.csv", "--api-key", "k"])
        .expect("expected valid cli args");

    match cli.command {
        Commands::Export { query, output } => {
            assert_eq!(output, Some(PathBuf::from("report.csv")));
            assert_eq!(query.api_key.as_deref(), Some("k"));
        }
        other => panic!("expected export command, got {other:?}"),
    }
}

#[test]
fn rejects_unknown_range() {
    assert!(Cli::try_parse_from(["adsdash", "dashboard", "--range", "yesterday"]).is_err());
}

#[test]
fn rejects_unknown_platform() {
    assert!(Cli::try_parse_from(["adsdash", "summary", "--platform", "tiktok"]).is_err());
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["adsdash"]).is_err());
}

#[test]
fn flag_api_key_overrides_config() {
    let cli = Cli::try_parse_from(["adsdash", "dashboard", "--api-key", "flag-key"])
        .expect("expected valid cli args");
    let Commands::Dashboard(query) = cli.command else {
        panic!("expected dashboard command");
    };
    let config = AppConfig {
        env: adsdash_core::Environment::Test,
        log_level: "info".to_string(),
        windsor_base_url: "http://localhost/all".to_string(),
        request_timeout_secs: 5,
        user_agent: "test".to_string(),
        api_key: Some("config-key".to_string()),
    };
    assert_eq!(query.tenant(&config).credential(), Some("flag-key"));

    let fallback = QueryArgs {
        api_key: None,
        project: Some("acme".to_string()),
        range: DateRange::default(),
        platform: PlatformFilter::default(),
    };
    let tenant = fallback.tenant(&config);
    assert_eq!(tenant.credential(), Some("config-key"));
    assert_eq!(tenant.project_id(), Some("acme"));
}
