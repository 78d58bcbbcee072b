use battle_sim::combat::BattleConfig;
use battle_sim::demo::run_demo;
use battle_sim::items::UseOutcome;
use pretty_assertions::assert_eq;

#[test]
fn demo_item_and_ability_steps() {
    let output = run_demo(&BattleConfig::default().with_seed(1));

    assert_eq!(output.backpack_value, 420);
    // health potion tops the warrior back up; the mana potion is wasted on them
    assert_eq!(output.item_uses, vec![UseOutcome::Healed(44), UseOutcome::Wasted]);
    assert!(output.slam_landed);
    assert!(output.narration.iter().any(|l| l == "Weapon Sword repaired by 30%."));
    assert!(output.narration.iter().any(|l| l.contains("uses heavy slam")));
}

#[test]
fn demo_reports_all_four_units() {
    let output = run_demo(&BattleConfig::default().with_seed(5));
    let names: Vec<&str> = output.report.units.iter().map(|u| u.name()).collect();
    assert_eq!(names, vec!["Warrior1", "Mage1", "Warrior2", "Mage2"]);
    assert_eq!(output.report.seed, 5);
    assert!(output.report.rounds >= 1 && output.report.rounds <= 21);

    let lines = output.report.summary_lines();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("[Warrior] Warrior1 | HP: "));
    assert!(lines[3].starts_with("[Mage] Mage2 | HP: "));
}

#[test]
fn demo_is_reproducible() {
    let first = run_demo(&BattleConfig::default().with_seed(77));
    let second = run_demo(&BattleConfig::default().with_seed(77));
    assert_eq!(first.narration, second.narration);
    assert_eq!(first.report, second.report);
}

#[test]
fn report_serializes_to_json() {
    let output = run_demo(&BattleConfig::default().with_seed(3));
    let json = serde_json::to_value(&output.report).unwrap();
    assert_eq!(json["seed"], 3);
    assert_eq!(json["units"].as_array().map(Vec::len), Some(4));
}
