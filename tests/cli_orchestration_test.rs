// tests/cli_orchestration_test.rs
use git2::{Repository as Git2Repo, Signature, Time};
use semver_gen::analyzer::NoopObserver;
use semver_gen::cli::{prepare_repository, run_generate, GenerateArgs, RepositorySource};
use semver_gen::config::{Config, ForceConfig, WordingConfig};
use semver_gen::git::Git2Repository;
use tempfile::TempDir;

fn commit(repo: &Git2Repo, message: &str, time: i64) -> git2::Oid {
    let signature = Signature::new("Test User", "test@example.com", &Time::new(time, 0)).unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parents: Vec<git2::Commit> = repo
        .head()
        .ok()
        .and_then(|head| head.peel_to_commit().ok())
        .into_iter()
        .collect();
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parent_refs,
    )
    .unwrap()
}

fn tag(repo: &Git2Repo, name: &str, oid: git2::Oid) {
    let object = repo.find_object(oid, None).unwrap();
    repo.tag_lightweight(name, &object, false).unwrap();
}

fn config() -> Config {
    Config {
        wording: WordingConfig {
            patch: vec!["fix".to_string()],
            minor: vec!["feature".to_string()],
            major: vec!["breaking".to_string()],
            release: vec!["candidate".to_string()],
        },
        ..Config::default()
    }
}

#[test]
fn test_generate_on_real_repository() {
    let dir = TempDir::new().unwrap();
    let repo = Git2Repo::init(dir.path()).unwrap();
    commit(&repo, "Initial commit", 1_700_000_000);
    commit(&repo, "feature: login page", 1_700_000_100);
    commit(&repo, "fix: typo", 1_700_000_200);

    let repo = Git2Repository::from_git2(repo);
    let result = run_generate(&repo, &GenerateArgs::default(), &config(), &NoopObserver).unwrap();

    // 0.0.1, then 0.1.1 (the default bump is reset by minor), then +2
    assert_eq!(result.version.to_string(), "0.1.3");
    assert_eq!(result.commits.len(), 3);
    assert_eq!(result.commits[0].message, "Initial commit");
    assert!(result.warnings.is_empty());
}

#[test]
fn test_generate_resumes_from_real_tag() {
    let dir = TempDir::new().unwrap();
    let repo = Git2Repo::init(dir.path()).unwrap();
    commit(&repo, "Initial commit", 1_700_000_000);
    let tagged = commit(&repo, "feature: search", 1_700_000_100);
    tag(&repo, "v1.4.0", tagged);
    commit(&repo, "fix: crash", 1_700_000_200);

    let repo = Git2Repository::from_git2(repo);
    let args = GenerateArgs {
        strict: true,
        existing: true,
    };
    let result = run_generate(&repo, &args, &config(), &NoopObserver).unwrap();

    assert_eq!(result.version.to_string(), "1.4.1");
    assert_eq!(result.resumed_from_tag.as_deref(), Some("v1.4.0"));
    assert_eq!(result.commits.len(), 1);
}

#[test]
fn test_generate_with_forced_start_commit() {
    let dir = TempDir::new().unwrap();
    let repo = Git2Repo::init(dir.path()).unwrap();
    commit(&repo, "breaking: old api", 1_700_000_000);
    let start = commit(&repo, "fix: one", 1_700_000_100);
    commit(&repo, "fix: two", 1_700_000_200);

    let repo = Git2Repository::from_git2(repo);
    let config = Config {
        force: ForceConfig {
            commit: Some(start.to_string()),
            strict: true,
            ..ForceConfig::default()
        },
        ..config()
    };
    let result = run_generate(&repo, &GenerateArgs::default(), &config, &NoopObserver).unwrap();

    assert_eq!(result.version.to_string(), "0.0.2");
    assert_eq!(result.commits.len(), 2);
}

#[test]
fn test_prepare_local_repository_from_subdirectory() {
    let dir = TempDir::new().unwrap();
    let repo = Git2Repo::init(dir.path()).unwrap();
    commit(&repo, "Initial commit", 1_700_000_000);
    let nested = dir.path().join("nested");
    std::fs::create_dir(&nested).unwrap();

    let repo = prepare_repository(&RepositorySource::Local(nested)).unwrap();
    let result = run_generate(&repo, &GenerateArgs::default(), &Config::default(), &NoopObserver)
        .unwrap();
    assert_eq!(result.version.to_string(), "0.0.1");
}

#[test]
fn test_generate_fails_on_empty_repository() {
    let dir = TempDir::new().unwrap();
    let repo = Git2Repository::from_git2(Git2Repo::init(dir.path()).unwrap());
    assert!(run_generate(&repo, &GenerateArgs::default(), &config(), &NoopObserver).is_err());
}
