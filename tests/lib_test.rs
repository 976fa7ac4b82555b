//! Library integration tests.

use qgate::coverage::{evaluate, CoverageParser, CoverageSample, ThresholdTable, OVERALL_KEY};
use qgate::scan::{Classifier, RuleSet, ScanOptions, Scanner, SignatureRule};
use qgate::GateError;
use std::fs;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = GateError::ToolMissing {
        tool: "pytest".into(),
        hint: "pip install pytest pytest-cov".into(),
    };
    assert_eq!(
        err.to_string(),
        "pytest not found. Install with: pip install pytest pytest-cov"
    );
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> qgate::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use qgate::cli::{Cli, Commands};

    let cli = Cli::parse_from(["qgate", "coverage", "routes"]);
    match cli.command {
        Commands::Coverage(args) => assert_eq!(args.module.as_deref(), Some("routes")),
        _ => panic!("Expected Coverage command"),
    }
}

#[test]
fn classify_is_order_stable() {
    let text = "a = \"Error\"\nb = \"Invalid\"\nc = \"404\"\n";
    let classifier = Classifier::default();

    let first = classifier.classify("x.py", text);
    let second = classifier.classify("x.py", text);

    assert_eq!(first, second);
    let lines: Vec<usize> = first.iter().map(|f| f.line).collect();
    assert_eq!(lines, vec![1, 2, 3]);
}

#[test]
fn findings_never_come_from_comment_lines() {
    let text = "# return \"Error\"\n    // \"Failed\"\n\t# \"Invalid\"\n";
    assert!(Classifier::default().classify("x.py", text).is_empty());
}

#[test]
fn empty_rule_set_finds_nothing() {
    let classifier = Classifier::new(RuleSet::new(Vec::new()));
    assert!(classifier.classify("x.py", "\"Error\"").is_empty());
}

#[test]
fn one_line_can_match_several_rules() {
    let rules = RuleSet::new(vec![
        SignatureRule::new("first", "boom", "a").unwrap(),
        SignatureRule::new("second", "BOOM", "b").unwrap(),
    ]);
    let findings = Classifier::new(rules).classify("x.py", "raise Boom()");

    let names: Vec<&str> = findings.iter().map(|f| f.rule.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn scanner_orders_findings_by_file_then_line() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("b.py"), "x = \"Failed\"\n").unwrap();
    fs::write(temp.path().join("a.py"), "\n\"Error\"\n\"Invalid\"\n").unwrap();

    let scanner = Scanner::new(Classifier::default(), ScanOptions::default());
    let report = scanner.scan(temp.path()).unwrap();

    let locations: Vec<(String, usize)> = report
        .findings
        .iter()
        .map(|f| {
            let name = std::path::Path::new(&f.file)
                .file_name()
                .unwrap()
                .to_string_lossy()
                .into_owned();
            (name, f.line)
        })
        .collect();
    assert_eq!(
        locations,
        vec![
            ("a.py".to_string(), 2),
            ("a.py".to_string(), 3),
            ("b.py".to_string(), 1)
        ]
    );
}

#[test]
fn every_threshold_is_checked_even_when_missing() {
    let sample: CoverageSample = [("models", 95)].into_iter().collect();
    let verdict = evaluate(&sample, &ThresholdTable::default());

    let modules: Vec<&str> = verdict.shortfalls.iter().map(|s| s.module.as_str()).collect();
    assert_eq!(modules, vec!["routes", "utils", OVERALL_KEY]);
    assert!(verdict.shortfalls.iter().all(|s| s.actual == 0));
}

#[test]
fn passed_iff_no_shortfalls() {
    let thresholds: ThresholdTable = [("models", 50)].into_iter().collect();

    let pass = evaluate(&[("models", 50)].into_iter().collect(), &thresholds);
    let fail = evaluate(&[("models", 49)].into_iter().collect(), &thresholds);

    assert!(pass.passed && pass.shortfalls.is_empty());
    assert!(!fail.passed && fail.shortfalls.len() == 1);
}

#[test]
fn extra_sample_modules_are_ignored() {
    let thresholds: ThresholdTable = [("models", 50)].into_iter().collect();
    let sample: CoverageSample = [("models", 60), ("services", 1)].into_iter().collect();

    assert!(evaluate(&sample, &thresholds).passed);
}

#[test]
fn parser_takes_last_module_line_and_total() {
    let output = "\
app/models/user.py      40      8    80%
app/models/__init__.py   0      0   100%
app/routes/users.py     20      2    90%
TOTAL                   60     10    83%
";
    let sample = CoverageParser::default().parse(output);

    assert_eq!(sample.get("models"), Some(100));
    assert_eq!(sample.get("routes"), Some(90));
    assert_eq!(sample.overall(), Some(83));
}

#[test]
fn parser_ignores_unrelated_output() {
    let sample = CoverageParser::default().parse("collected 12 items\n12 passed in 0.4s\n");
    assert!(sample.is_empty());
}
