use careerloop::cli::{Cli, Commands};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_init() {
    let cli = Cli::try_parse_from(vec![
        "careerloop",
        "init",
        "stage1.json",
        "stage2.json",
        "stage3.json",
        "--out",
        "session.json",
    ])
    .unwrap();

    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.stage1, PathBuf::from("stage1.json"));
            assert_eq!(args.stage2, PathBuf::from("stage2.json"));
            assert_eq!(args.stage3, PathBuf::from("stage3.json"));
            assert_eq!(args.out, Some(PathBuf::from("session.json")));
        }
        _ => panic!("Wrong top-level command"),
    }
    assert!(!cli.json);
}

#[test]
fn test_parse_init_requires_three_stage_files() {
    let result = Cli::try_parse_from(vec!["careerloop", "init", "stage1.json", "stage2.json"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_outcome() {
    let cli = Cli::try_parse_from(vec![
        "careerloop",
        "outcome",
        "session.json",
        "interview",
        "--out",
        "session.json",
    ])
    .unwrap();

    match cli.command {
        Commands::Outcome(args) => {
            assert_eq!(args.session, PathBuf::from("session.json"));
            assert_eq!(args.value, "interview");
            assert_eq!(args.out, Some(PathBuf::from("session.json")));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_explain_with_global_json_flag() {
    let cli = Cli::try_parse_from(vec!["careerloop", "explain", "session.json", "--json"]).unwrap();
    assert!(cli.json);
    match cli.command {
        Commands::Explain(args) => {
            assert_eq!(args.session, PathBuf::from("session.json"));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_roadmap_check_only() {
    let cli =
        Cli::try_parse_from(vec!["careerloop", "roadmap", "session.json", "--check-only"]).unwrap();
    match cli.command {
        Commands::Roadmap(args) => {
            assert!(args.check_only);
            assert_eq!(args.existing, None);
            assert_eq!(args.out, None);
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_roadmap_existing() {
    let cli = Cli::try_parse_from(vec![
        "careerloop",
        "roadmap",
        "session.json",
        "--existing",
        "roadmap.json",
    ])
    .unwrap();
    match cli.command {
        Commands::Roadmap(args) => {
            assert!(!args.check_only);
            assert_eq!(args.existing, Some(PathBuf::from("roadmap.json")));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_json_flag_is_global() {
    let cli = Cli::try_parse_from(vec![
        "careerloop",
        "--json",
        "outcome",
        "session.json",
        "rejected",
    ])
    .unwrap();
    assert!(cli.json);
}

#[test]
fn test_unknown_command_rejected() {
    assert!(Cli::try_parse_from(vec!["careerloop", "frobnicate"]).is_err());
}
