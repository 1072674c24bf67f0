//! Integration tests for construction, merging and validation

use argmerge::{
    from_cmd_tokens, from_env_entries, from_file, param, param_set, ConfigError, ParamSet,
    ParamSpec, Slot, SlotVisitor,
};
use std::io::Write;
use tempfile::NamedTempFile;

param!(Asdf: String, "asdf", "asdf-description");
param!(Asdf2: String, "asdf2", "asdf2-description");
param!(Mandatory: bool, "mandatory", "To be checked for mandatory usage");
param!(Level: i64, "level", "Numeric level");
param!(Ratio: f64, "ratio", "A ratio");

param_set! {
    struct FullParams {
        asdf: Asdf,
        asdf2: Asdf2,
        mandatory: Mandatory,
        level: Level,
        ratio: Ratio,
    }
}

param_set! {
    struct SubsetParams {
        asdf: Asdf,
        level: Level,
    }
}

#[test]
fn cmd_tokens_populate_flags_and_values() {
    let params: FullParams = from_cmd_tokens(["asdf2=123", "mandatory"]).expect("load");

    assert_eq!(params.get::<Asdf>(), None);
    assert_eq!(params.get::<Asdf2>().map(String::as_str), Some("123"));
    assert_eq!(params.get::<Mandatory>(), Some(&true));
    params.check_mandatory::<(Mandatory,)>().expect("mandatory populated");
}

#[test]
fn construction_round_trips_converted_values() {
    let params: FullParams =
        from_cmd_tokens(["level=42", "ratio=2.5", "asdf=plain"]).expect("load");

    assert_eq!(params.get::<Level>(), Some(&42));
    assert_eq!(params.get::<Ratio>(), Some(&2.5));
    assert_eq!(params.get::<Asdf>().map(String::as_str), Some("plain"));
}

#[test]
fn malformed_integer_fails_the_whole_load() {
    let err = from_cmd_tokens::<FullParams, _>(["level=xyz"]).expect_err("must fail");
    assert!(matches!(err, ConfigError::Conversion { name: "level", .. }));
}

#[test]
fn subset_merge_changes_exactly_the_populated_overlap() {
    let mut target = FullParams::default();
    target.set::<Asdf>("original".to_string());
    target.set::<Level>(1);
    target.set::<Asdf2>("untouched".to_string());

    // Subset populates only `asdf`; `level` stays unpopulated.
    let overlay: SubsetParams = from_cmd_tokens(["asdf=overridden"]).expect("load");
    target.merge(&overlay);

    assert_eq!(target.get::<Asdf>().map(String::as_str), Some("overridden"));
    assert_eq!(target.get::<Level>(), Some(&1));
    assert_eq!(target.get::<Asdf2>().map(String::as_str), Some("untouched"));
    assert_eq!(target.get::<Mandatory>(), None);
}

#[test]
fn merging_an_empty_set_is_a_no_op() {
    let mut target = FullParams::default();
    target.set::<Level>(7);

    target.merge(&SubsetParams::default());

    assert_eq!(target.get::<Level>(), Some(&7));
    assert_eq!(target.get::<Asdf>(), None);
}

#[test]
fn later_merge_wins_file_then_cmd() {
    let mut conf = NamedTempFile::new().expect("tmp");
    writeln!(conf, "asdf=fromfile").expect("write");

    let mut params = FullParams::default();
    let file: FullParams = from_file(conf.path()).expect("file load");
    let cmd: FullParams = from_cmd_tokens(["asdf=fromcmd"]).expect("cmd load");

    params.merge(&file);
    params.merge(&cmd);

    assert_eq!(params.get::<Asdf>().map(String::as_str), Some("fromcmd"));
}

#[test]
fn precedence_chain_defaults_file_env_cmd() {
    let mut conf = NamedTempFile::new().expect("tmp");
    writeln!(conf, "asdf=fromfile").expect("write");
    writeln!(conf, "level=10").expect("write");
    writeln!(conf, "ratio=0.5").expect("write");

    let mut params = FullParams::default();
    params.set::<Asdf>("default".to_string());
    params.set::<Asdf2>("default2".to_string());

    let file: FullParams = from_file(conf.path()).expect("file load");
    let env: FullParams =
        from_env_entries([("level", "20"), ("HOME", "/home/u")]).expect("env load");
    let cmd: FullParams = from_cmd_tokens(["level=30"]).expect("cmd load");

    params.merge(&file);
    params.merge(&env);
    params.merge(&cmd);

    // cmd beats env beats file; file beats the seeded default; untouched
    // defaults survive.
    assert_eq!(params.get::<Level>(), Some(&30));
    assert_eq!(params.get::<Asdf>().map(String::as_str), Some("fromfile"));
    assert_eq!(params.get::<Ratio>(), Some(&0.5));
    assert_eq!(params.get::<Asdf2>().map(String::as_str), Some("default2"));
}

#[test]
fn env_snapshot_is_consumed_wholesale() {
    let env: FullParams =
        from_env_entries([("PATH", "/usr/bin"), ("asdf", "fromenv")]).expect("env load");
    assert_eq!(env.get::<Asdf>().map(String::as_str), Some("fromenv"));
    assert_eq!(env.get::<Asdf2>(), None);
}

#[test]
fn missing_file_yields_source_unavailable_and_no_set() {
    let err = from_file::<FullParams, _>("/no/such/settings.txt").expect_err("must fail");
    assert!(matches!(err, ConfigError::SourceUnavailable { .. }));
}

#[test]
fn unpopulated_mandatory_fails_with_its_identity() {
    let mut params = FullParams::default();
    params.set::<Asdf>("present".to_string());

    let err = params.check_mandatory::<(Mandatory,)>().expect_err("must fail");
    match err {
        ConfigError::MissingMandatory { name, kind } => {
            assert_eq!(name, "mandatory");
            assert_eq!(kind, argmerge::ValueKind::Boolean);
        }
        other => panic!("wrong error kind: {other}"),
    }
}

#[test]
fn mandatory_check_stops_at_the_first_missing_identity() {
    let params = FullParams::default();

    let err = params.check_mandatory::<(Mandatory, Level)>().expect_err("must fail");
    assert!(matches!(err, ConfigError::MissingMandatory { name: "mandatory", .. }));
}

#[test]
fn mandatory_check_passes_once_any_source_populated_it() {
    let mut params = FullParams::default();
    let cmd: FullParams = from_cmd_tokens(["mandatory=0"]).expect("load");
    params.merge(&cmd);

    // Populated with an explicit false still counts as populated.
    params.check_mandatory::<(Mandatory,)>().expect("populated");
    assert_eq!(params.get::<Mandatory>(), Some(&false));
}

#[test]
fn require_returns_value_or_missing_mandatory() {
    let mut params = FullParams::default();
    assert!(matches!(
        params.require::<Level>(),
        Err(ConfigError::MissingMandatory { name: "level", .. })
    ));

    params.set::<Level>(3);
    assert_eq!(params.require::<Level>().expect("populated"), &3);
}

#[test]
fn describe_lists_identities_in_declaration_order() {
    let names: Vec<&str> = FullParams::describe().iter().map(|(name, _)| *name).collect();
    assert_eq!(names, ["asdf", "asdf2", "mandatory", "level", "ratio"]);

    let (_, description) = FullParams::describe()[0];
    assert_eq!(description, "asdf-description");
}

#[test]
fn for_each_visits_slots_in_declaration_order() {
    struct CollectNames(Vec<&'static str>);

    impl SlotVisitor for CollectNames {
        fn visit<P: ParamSpec>(&mut self, _slot: &Slot<P>) {
            self.0.push(P::NAME);
        }
    }

    let params = FullParams::default();
    let mut collector = CollectNames(Vec::new());
    params.for_each(&mut collector);
    assert_eq!(collector.0, ["asdf", "asdf2", "mandatory", "level", "ratio"]);
}

#[test]
fn blank_lines_in_files_are_no_ops() {
    let mut conf = NamedTempFile::new().expect("tmp");
    writeln!(conf).expect("write");
    writeln!(conf, "asdf=value").expect("write");
    writeln!(conf).expect("write");

    let params: FullParams = from_file(conf.path()).expect("load");
    assert_eq!(params.get::<Asdf>().map(String::as_str), Some("value"));
}

#[test]
fn value_with_embedded_equals_survives_the_split() {
    let params: FullParams = from_cmd_tokens(["asdf=a=b=c"]).expect("load");
    assert_eq!(params.get::<Asdf>().map(String::as_str), Some("a=b=c"));
}
