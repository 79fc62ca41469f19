// tests/apt_scan.rs

//! Scans against scripted apt-mark/apt-cache output.

mod common;

use common::{apt_depends, render, ScriptedRunner};
use manual_dupes::{AptBackend, PackageBackend, Scanner};

#[test]
fn test_apt_ordering_example() {
    let runner = ScriptedRunner::new()
        .respond("apt-mark showmanual", "A\nB\nC\n")
        .respond(&apt_depends("A"), "A\n")
        .respond(&apt_depends("B"), "B\n  Depends: A\nA\n")
        .respond(
            &apt_depends("C"),
            "C\n  Depends: B\n  Depends: A\nB\n  Depends: A\nA\n",
        );
    let backend = AptBackend::new(runner);

    let report = Scanner::new(&backend).scan().unwrap();
    assert_eq!(
        render(&report),
        "B depends on A\nC depends on A\nC depends on B\n"
    );
    assert_eq!(report.packages_scanned, 3);
}

#[test]
fn test_apt_realistic_tree() {
    let git_tree = "\
git
  Depends: libc6
  Depends: libcurl3-gnutls
  Depends: perl
  Depends: <git-man>
  PreDepends: zlib1g
libc6
  Depends: libgcc-s1
libcurl3-gnutls
  Depends: libc6
perl
  Depends: perl-base
  Depends: <perlapi-5.36.0>
<perlapi-5.36.0>
perl-base
zlib1g
";
    let runner = ScriptedRunner::new()
        .respond("apt-mark showmanual", "zlib1g\ngit\nperl\nvim\n")
        .respond(&apt_depends("zlib1g"), "zlib1g\n  Depends: libc6\nlibc6\n")
        .respond(&apt_depends("git"), git_tree)
        .respond(&apt_depends("perl"), "perl\n  Depends: perl-base\nperl-base\n")
        .respond(&apt_depends("vim"), "vim\n  Depends: libc6\nlibc6\n");
    let backend = AptBackend::new(runner);

    let deps = backend.closure("git");
    assert!(deps.contains("perl"));
    assert!(deps.contains("zlib1g"));
    assert!(!deps.contains("git"));
    assert!(!deps.iter().any(|d| d.starts_with('<')));
    assert!(!deps.iter().any(|d| d.ends_with(':')));

    let report = Scanner::new(&backend).scan().unwrap();
    assert_eq!(
        render(&report),
        "git depends on zlib1g\ngit depends on perl\n"
    );
}

#[test]
fn test_apt_exact_commands() {
    let runner = ScriptedRunner::new()
        .respond("apt-mark showmanual", "bash\n")
        .respond(&apt_depends("bash"), "bash\n");
    let backend = AptBackend::new(runner.clone());

    Scanner::new(&backend).scan().unwrap();
    assert_eq!(
        runner.calls(),
        vec![
            "apt-mark showmanual".to_string(),
            "apt-cache depends --recurse --no-recommends --no-suggests --no-conflicts \
--no-breaks --no-replaces --no-enhances bash"
                .to_string(),
        ]
    );
}

#[test]
fn test_apt_manual_list_skips_blank_lines() {
    let runner = ScriptedRunner::new().respond("apt-mark showmanual", "\nbash\n   \ncoreutils\n");
    let backend = AptBackend::new(runner);
    assert_eq!(backend.list_manual(), vec!["bash", "coreutils"]);
}

#[test]
fn test_apt_manual_list_unavailable() {
    let backend = AptBackend::new(ScriptedRunner::new().fail("apt-mark showmanual"));
    assert!(backend.list_manual().is_empty());

    let report = Scanner::new(&backend).scan().unwrap();
    assert!(report.is_clean());
    assert_eq!(report.packages_scanned, 0);
}
