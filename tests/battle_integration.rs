//! Battle system integration tests

use game_helper::battle::*;
use game_helper::speech::battle_summary;

#[test]
fn test_no_combat_possible_on_entry() {
    for (attackers, defenders) in [(0, 3), (1, 5), (1, 0), (4, 0)] {
        let mut dice = ScriptedDice::constant(6);
        let outcome = simulate(attackers, defenders, &mut dice);

        assert_eq!(outcome.as_tuple(), (attackers, defenders, 0));
        assert_eq!(dice.rolled(), 0);
    }
}

#[test]
fn test_two_vs_one_hand_trace() {
    // One die each per round until someone falls
    // Round 1: 3 vs 3 tie -> attacker loses its only fighter
    let mut dice = ScriptedDice::new(vec![3, 3]);
    let outcome = simulate(2, 1, &mut dice);
    assert_eq!(outcome.as_tuple(), (1, 1, 1));
    assert!(!outcome.attackers_won());

    // Round 1: 6 vs 2 -> defender destroyed
    let mut dice = ScriptedDice::new(vec![6, 2]);
    let outcome = simulate(2, 1, &mut dice);
    assert_eq!(outcome.as_tuple(), (2, 0, 1));
    assert!(outcome.attackers_won());
}

#[test]
fn test_full_strength_hand_trace() {
    // 5 attackers vs 3 defenders
    // Round 1: att [6,6,1] -> [1,6,6], def [5,2] -> [2,5]: 1v2 loss, 6v5 win -> 4 vs 2
    // Round 2: att [4,4,4], def [4,3] -> [3,4]: 4v3 win, 4v4 loss -> 3 vs 1
    // Round 3: att [2,5] -> [2,5], def [1]: 2v1 win -> 3 vs 0
    let faces = vec![6, 6, 1, 5, 2, 4, 4, 4, 4, 3, 2, 5, 1];
    let mut dice = ScriptedDice::new(faces);
    let trace = simulate_traced(5, 3, &mut dice);

    assert_eq!(trace.outcome.as_tuple(), (3, 0, 3));
    assert_eq!(dice.rolled(), 13);

    let fights: Vec<u32> = trace.rounds.iter().map(|r| r.fights).collect();
    assert_eq!(fights, vec![2, 2, 1]);
    let wins: Vec<u32> = trace.rounds.iter().map(|r| r.attacker_wins).collect();
    assert_eq!(wins, vec![1, 1, 1]);
}

#[test]
fn test_constant_ties_grind_attacker_down() {
    // Every comparison ties, so the attacker loses every fight
    let mut dice = ScriptedDice::constant(4);
    let outcome = simulate(10, 3, &mut dice);

    assert_eq!(outcome.final_attackers, 1);
    assert_eq!(outcome.final_defenders, 3);
    // 9 losses taken two per round, then one
    assert_eq!(outcome.rounds, 5);
}

#[test]
fn test_seeded_battle_summary() {
    let mut dice = RngDice::seeded(2024);
    let outcome = simulate(5, 4, &mut dice);
    let text = battle_summary(&outcome);

    if outcome.attackers_won() {
        assert!(text.starts_with("The attackers won a battle of 5 vs 4"));
    } else {
        assert!(text.starts_with("The defenders survived a battle of 5 vs 4"));
    }
}

#[test]
fn test_outcome_serializes() {
    let mut dice = ScriptedDice::new(vec![6, 1]);
    let outcome = simulate(2, 1, &mut dice);
    let json = serde_json::to_string(&outcome).unwrap();

    assert!(json.contains("\"final_defenders\":0"));
    let back: BattleOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back, outcome);
}
