use uridoki::domain::values::decision::{decide_sell_action, derive_decision, Decision};

#[test]
fn test_missing_score_waits() {
    assert_eq!(derive_decision(None), Decision::Wait);
    assert_eq!(derive_decision(Some(f64::NAN)), Decision::Wait);
}

#[test]
fn test_decision_boundaries() {
    assert_eq!(derive_decision(Some(60.0)), Decision::TakeProfit);
    assert_eq!(derive_decision(Some(59.999)), Decision::Wait);
    assert_eq!(derive_decision(Some(40.0)), Decision::Wait);
    assert_eq!(derive_decision(Some(39.999)), Decision::HoldOrBuy);
}

#[test]
fn test_out_of_range_scores_still_classify() {
    assert_eq!(derive_decision(Some(150.0)), Decision::TakeProfit);
    assert_eq!(derive_decision(Some(-5.0)), Decision::HoldOrBuy);
    assert_eq!(derive_decision(Some(f64::INFINITY)), Decision::TakeProfit);
    assert_eq!(derive_decision(Some(f64::NEG_INFINITY)), Decision::HoldOrBuy);
}

#[test]
fn test_decision_is_monotonic() {
    // 0.25 steps from -10 to 110
    let scores: Vec<f64> = (-40..=440).map(|i| i as f64 * 0.25).collect();
    for pair in scores.windows(2) {
        let (lo, hi) = (derive_decision(Some(pair[0])), derive_decision(Some(pair[1])));
        assert!(
            lo.rank() <= hi.rank(),
            "{} -> {lo} but {} -> {hi}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_every_score_maps_to_known_decision() {
    for i in 0..=1000 {
        let d = derive_decision(Some(i as f64 / 10.0));
        assert!(Decision::ALL.contains(&d));
    }
}

#[test]
fn test_sell_action_table() {
    assert_eq!(decide_sell_action(None), Decision::HoldOrBuy);
    assert_eq!(decide_sell_action(Some(f64::NAN)), Decision::HoldOrBuy);
    assert_eq!(decide_sell_action(Some(95.0)), Decision::TakeProfit);
    assert_eq!(decide_sell_action(Some(80.0)), Decision::TakeProfit);
    assert_eq!(decide_sell_action(Some(60.0)), Decision::TakeProfit);
    assert_eq!(decide_sell_action(Some(59.9)), Decision::Wait);
    assert_eq!(decide_sell_action(Some(40.0)), Decision::Wait);
    assert_eq!(decide_sell_action(Some(39.9)), Decision::HoldOrBuy);
}

#[test]
fn test_sell_action_agrees_with_decision_when_score_present() {
    for i in -100..=1100 {
        let s = Some(i as f64 / 10.0);
        assert_eq!(decide_sell_action(s), derive_decision(s), "score {s:?}");
    }
}
