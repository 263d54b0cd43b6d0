use super::*;

fn share(id: i64, success: bool) -> Share {
    Share { id, campaign_id: 1, code: format!("CODE{id}"), success, created_at_ms: 0 }
}

#[test]
fn stats_for_empty_list_are_zero() {
    let stats = ShareStats::from_shares(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.success, 0);
    assert_eq!(stats.waiting(), 0);
}

#[test]
fn stats_count_successes_and_waiting() {
    let shares = vec![share(1, true), share(2, false), share(3, false), share(4, true)];
    let stats = ShareStats::from_shares(&shares);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.success, 2);
    assert_eq!(stats.waiting(), 2);
}

#[test]
fn stats_waiting_is_total_minus_success() {
    for successes in 0..=5 {
        let shares: Vec<Share> = (0..5).map(|i| share(i, i < successes)).collect();
        let stats = ShareStats::from_shares(&shares);
        assert!(stats.success <= stats.total);
        assert_eq!(stats.waiting(), stats.total - stats.success);
    }
}

#[test]
fn stats_all_success_leaves_none_waiting() {
    let shares = vec![share(1, true), share(2, true)];
    let stats = ShareStats::from_shares(&shares);
    assert_eq!(stats.success, 2);
    assert_eq!(stats.waiting(), 0);
}
