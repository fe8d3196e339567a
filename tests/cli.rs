use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const DRAGON_CLAWS_PAGE: &str = "{{Infobox Item\n|name = Dragon claws\n|quest = No\n|equipable = Yes\n|weight = 0\n}}\n{{Infobox Bonuses\n|astab = 41\n|aslash = 57\n|str = 56\n|aspeed = 4|slot = 2h\n|image = Dragon claws equipped.png{{!}}130px}}\n";

fn write_workspace(root: &Path) {
    fs::write(
        root.join("items.json"),
        r#"[
            {"id": 13652, "name": "Dragon claws"},
            {"id": 13653, "name": "Dragon claws"},
            {"id": 0, "name": "null"},
            {"id": 2434, "name": "Prayer potion(4)"},
            {"id": 139, "name": "Prayer potion(3)"}
        ]"#,
    )
    .expect("items");

    let pages = root.join("pages");
    fs::create_dir_all(pages.join("Module:Exchange")).expect("pages");
    fs::write(pages.join("Dragon claws.txt"), DRAGON_CLAWS_PAGE).expect("page");
    fs::write(
        pages.join("Module:Exchange").join("Dragon claws.txt"),
        "return {\n  itemId = 13652,\n  limit = 70,\n  value = 123000\n}\n",
    )
    .expect("module");
}

#[test]
fn stats_command_writes_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_workspace(dir.path());

    let mut cmd = cargo_bin_cmd!("infobox");
    cmd.current_dir(dir.path())
        .arg("stats")
        .arg("--items")
        .arg("items.json")
        .arg("--pages")
        .arg("pages")
        .arg("--out")
        .arg("out");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Dumped 1 item stats"));

    let written =
        fs::read_to_string(dir.path().join("out").join("item_stats.json")).expect("stats");
    let json: serde_json::Value = serde_json::from_str(&written).expect("valid json");
    assert_eq!(json["Dragon claws"]["equipable"], true);
    assert_eq!(json["Dragon claws"]["quest"], false);
    assert_eq!(json["Dragon claws"]["equipment"]["slot"], 3);
    assert_eq!(json["Dragon claws"]["equipment"]["astab"], 41);
    assert_eq!(json["Dragon claws"]["equipment"]["aspeed"], 4);
}

#[test]
fn limits_command_writes_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_workspace(dir.path());
    fs::write(
        dir.path().join("infobox.toml"),
        "[pages]\ndir = \"pages\"\n\n[output]\npretty = false\n",
    )
    .expect("config");

    let mut cmd = cargo_bin_cmd!("infobox");
    cmd.current_dir(dir.path())
        .arg("--config")
        .arg("infobox.toml")
        .arg("limits")
        .arg("--items")
        .arg("items.json")
        .arg("--out")
        .arg("out");
    cmd.assert().success();

    let written =
        fs::read_to_string(dir.path().join("out").join("item_limits.json")).expect("limits");
    insta::assert_snapshot!(written, @r###"{"Dragon claws":70}"###);
}

#[test]
fn variations_command_writes_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_workspace(dir.path());

    let mut cmd = cargo_bin_cmd!("infobox");
    cmd.current_dir(dir.path())
        .arg("variations")
        .arg("--items")
        .arg("items.json")
        .arg("--out")
        .arg("out");
    cmd.assert().success();

    let written = fs::read_to_string(dir.path().join("out").join("item_variations.json"))
        .expect("variations");
    let json: serde_json::Value = serde_json::from_str(&written).expect("valid json");
    assert_eq!(json["prayer potion"], serde_json::json!([2434, 139]));
    assert_eq!(json["dragon claws"], serde_json::json!([13652, 13653]));
}

#[test]
fn fields_command_prints_template_fields() {
    let dir = tempfile::tempdir().expect("temp dir");
    let page = dir.path().join("page.txt");
    fs::write(&page, DRAGON_CLAWS_PAGE).expect("page");

    let mut cmd = cargo_bin_cmd!("infobox");
    cmd.arg("fields").arg(&page).arg("--template").arg("infobox bonuses");
    cmd.assert().success().stdout(
        predicate::str::contains(r#""key": "image""#)
            .and(predicate::str::contains(r#""value": "Dragon claws equipped.png{{!}}130px""#)),
    );
}

#[test]
fn fields_command_reports_missing_template() {
    let dir = tempfile::tempdir().expect("temp dir");
    let page = dir.path().join("page.txt");
    fs::write(&page, "No infobox here.").expect("page");

    let mut cmd = cargo_bin_cmd!("infobox");
    cmd.arg("fields").arg(&page).arg("--template").arg("Infobox Item");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no match for {{Infobox Item"));
}
