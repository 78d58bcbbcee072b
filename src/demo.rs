//! Scripted demonstration: inventory, item use, special ability, then a full battle.

use combat::{BattleConfig, BattleManager};
use items::{Item, UseOutcome};
use units::{Inventory, Unit};

use crate::report::BattleReport;

/// Everything the scenario produced
#[derive(Debug, Clone)]
pub struct DemoOutput {
    pub narration: Vec<String>,
    pub backpack_value: u32,
    pub item_uses: Vec<UseOutcome>,
    pub slam_landed: bool,
    pub report: BattleReport,
}

pub fn run_demo(config: &BattleConfig) -> DemoOutput {
    let mut narration = Vec::new();

    narration.push("--- 1. Creating Objects & Inventory ---".to_string());
    let mut warrior = Unit::warrior("Warrior1");
    let mut mage = Unit::mage("Mage1").at(1, 0);
    let mut enemy = Unit::warrior("Warrior2").at(5, 3);

    let mut backpack: Inventory<Item> = Inventory::new(10);
    backpack.add(Item::weapon("Sword", 20, 5.0));
    backpack.add(Item::consumable("Health Potion", 0.5, 60, false));
    backpack.add(Item::consumable("Mana Potion", 0.5, 50, true));

    narration.push(backpack.show());
    let backpack_value = backpack.calculate_total_value();
    narration.push(format!("Backpack Value: {} coins", backpack_value));
    narration.push(format!(
        "{} stands {} tiles from {}",
        warrior.name(),
        warrior.distance_to(&enemy),
        enemy.name()
    ));

    narration.push("--- 2. Using Items (Polymorphism) ---".to_string());
    if let Some(sword) = backpack.get_mut(0) {
        let outcome = sword.use_on(&mut warrior);
        narration.push(outcome.message(&sword.name, warrior.name()));
        if let Some(weapon) = sword.as_weapon_mut() {
            weapon.wear(30);
            match weapon.repair() {
                Some(restored) => {
                    narration.push(format!("Weapon Sword repaired by {}%.", restored))
                }
                None => narration.push("Weapon is in perfect condition.".to_string()),
            }
        }
    }

    let mut item_uses = Vec::new();
    for index in 1..backpack.len() {
        let Some(item) = backpack.get_mut(index) else {
            continue;
        };

        warrior.take_damage(50);
        mage.set_mana(10);

        let outcome = item.use_on(&mut warrior);
        narration.push(outcome.message(&item.name, warrior.name()));
        item_uses.push(outcome);

        if !item.is_consumed() {
            let outcome = item.use_on(&mut mage);
            narration.push(outcome.message(&item.name, mage.name()));
            item_uses.push(outcome);
        }
    }
    let spent = backpack.filter_items(|item| item.is_consumed()).len();
    narration.push(format!("{} consumable(s) used up", spent));

    narration.push("--- 3. Special Actions ---".to_string());
    warrior.set_rage(50);
    let slam = warrior.heavy_slam(&mut enemy);
    let slam_landed = slam.is_some();
    match slam {
        Some(result) => narration.extend(result.logs),
        None => narration.push(format!("{} grunts (not enough Rage)!", warrior.name())),
    }

    narration.push("--- 4. Battle (BattleManager) ---".to_string());
    let enemy_mage = Unit::mage("Mage2").at(6, 3);

    let mut squad_a: Inventory<Unit> = Inventory::new(5);
    squad_a.add(warrior);
    squad_a.add(mage);
    narration.push(format!("Squad A {}", squad_a.show()));
    let mut squad_b = vec![enemy, enemy_mage];

    let mut manager = BattleManager::new(config.clone());
    let outcome = manager.run(squad_a.as_mut_slice(), &mut squad_b);
    narration.extend(manager.take_log());

    let units: Vec<Unit> = squad_a.iter().cloned().chain(squad_b).collect();
    let report = BattleReport {
        outcome,
        rounds: manager.turn(),
        seed: manager.seed(),
        units,
    };

    narration.push("--- 5. Results ---".to_string());
    narration.extend(report.summary_lines());

    DemoOutput {
        narration,
        backpack_value,
        item_uses,
        slam_landed,
        report,
    }
}
