use rstest::rstest;
use volcfg::Document;

const LVM_CONF: &str = r#"
# volume manager defaults
devices {
    dir = "/dev"
    scan = [ "/dev" ]
    filter = [ "a|.*|" ]
    sysfs_scan = 1
}

log {
    verbose = 0
    level = 3
    file = "/var/log/lvm2.log"
    overwrite = 0
}

backup {
    retain_min = 10
    retain_days = 30.5
}

activation {
    reserved_stack = 256
    thin {
        pool_autoextend_threshold = 100
    }
}
"#;

fn document() -> Document {
    volcfg::from_str(LVM_CONF).expect("parse sample")
}

#[rstest]
#[case("log/level", 3)]
#[case("devices/sysfs_scan", 1)]
#[case("activation/thin/pool_autoextend_threshold", 100)]
#[case("/activation/reserved_stack", 256)]
#[case("log/missing", -1)]
#[case("log/file", -1)]
#[case("backup/retain_days", -1)]
#[case("log", -1)]
fn find_int_cases(#[case] path: &str, #[case] expected: i64) {
    assert_eq!(document().find_int(path, '/', -1), expected);
}

#[rstest]
#[case("devices/dir", "/dev")]
#[case("devices/scan", "/dev")]
#[case("log/file", "/var/log/lvm2.log")]
#[case("log/level", "fallback")]
#[case("nowhere/at/all", "fallback")]
fn find_str_cases(#[case] path: &str, #[case] expected: &str) {
    assert_eq!(document().find_str(path, '/', "fallback"), expected);
}

#[rstest]
#[case("backup/retain_days", 30.5)]
#[case("backup/retain_min", 1.0)]
#[case("backup", 1.0)]
fn find_float_cases(#[case] path: &str, #[case] expected: f64) {
    assert_eq!(document().find_float(path, '/', 1.0), expected);
}

#[rstest]
fn find_node_returns_sections_too() {
    let document = document();
    let thin = document.find_node("activation/thin", '/').unwrap();
    assert!(thin.is_section());
    assert_eq!(thin.children().count(), 1);
}

#[rstest]
fn find_node_is_case_sensitive() {
    let document = document();
    assert!(document.find_node("LOG/level", '/').is_none());
    assert!(document.find_node("log/Level", '/').is_none());
}

#[rstest]
fn relative_lookup_from_node() {
    let document = document();
    let activation = document.find_node("activation", '/').unwrap();
    let node = activation.find("thin:pool_autoextend_threshold", ':').unwrap();
    assert_eq!(node.first_value().and_then(|value| value.as_int()), Some(100));
}

#[rstest]
fn dot_separator() {
    assert_eq!(document().find_int("log.verbose", '.', 9), 0);
}

#[rstest]
fn find_str_accepts_short_lived_default() {
    let document = document();
    let found = {
        let default = String::from("computed");
        document.find_str("devices/dir", '/', &default).to_owned()
    };
    assert_eq!(found, "/dev");

    let default = format!("{}-{}", "fall", "back");
    assert_eq!(document.find_str("missing", '/', &default), "fall-back");
}
