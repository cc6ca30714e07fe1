use crate::domain::model::{Pairing, Participant};
use crate::domain::ports::RandomSource;
use crate::utils::error::{Result, SantaError};

/// Upper bound on repair sweeps. One forward pass resolves every permutation
/// shape seen in practice; the bound exists so a pathological shape fails
/// closed instead of delivering a self-pairing.
const MAX_REPAIR_PASSES: usize = 8;

/// Draws a permutation from `random` and turns it into giver/receiver pairs.
///
/// Fewer than two participants yields an empty assignment; a failed draw
/// yields no assignment at all.
pub async fn assign<R: RandomSource>(
    participants: &[Participant],
    random: &R,
) -> Result<Vec<Pairing>> {
    let n = participants.len();
    if n < 2 {
        tracing::warn!("Only {} participant(s); nothing to assign", n);
        return Ok(Vec::new());
    }

    let order = random.permutation(n).await?;
    pair_by_order(participants, &order)
}

/// Pure pairing step: givers keep their load order, receivers are the
/// participants reindexed by `order`, then self-pairings are repaired by
/// swapping each offending receiver with its successor (wrapping at the
/// end). Iteration order matters: a swap at index i changes what index i+1
/// sees, so the scan is strictly left to right.
pub fn pair_by_order(participants: &[Participant], order: &[usize]) -> Result<Vec<Pairing>> {
    let n = participants.len();
    validate_permutation(n, order)?;

    let givers = participants;
    let mut receivers: Vec<Participant> = order.iter().map(|&i| participants[i].clone()).collect();

    let mut passes = 0;
    while has_self_pairing(givers, &receivers) {
        if passes == MAX_REPAIR_PASSES {
            return Err(SantaError::AssignmentError {
                message: format!(
                    "could not eliminate self-assignments after {} repair passes",
                    MAX_REPAIR_PASSES
                ),
            });
        }
        repair_pass(givers, &mut receivers);
        passes += 1;
    }

    Ok(givers
        .iter()
        .cloned()
        .zip(receivers)
        .map(|(giver, receiver)| Pairing { giver, receiver })
        .collect())
}

fn repair_pass(givers: &[Participant], receivers: &mut [Participant]) {
    let n = givers.len();
    for i in 0..n {
        if givers[i].email == receivers[i].email {
            tracing::debug!("Self-pairing at index {}; swapping with successor", i);
            receivers.swap(i, (i + 1) % n);
        }
    }
}

fn has_self_pairing(givers: &[Participant], receivers: &[Participant]) -> bool {
    givers
        .iter()
        .zip(receivers)
        .any(|(g, r)| g.email == r.email)
}

fn validate_permutation(n: usize, order: &[usize]) -> Result<()> {
    if order.len() != n {
        return Err(SantaError::AssignmentError {
            message: format!("expected {} indices, got {}", n, order.len()),
        });
    }

    let mut seen = vec![false; n];
    for &i in order {
        if i >= n || seen[i] {
            return Err(SantaError::AssignmentError {
                message: format!("sequence is not a permutation of 0..{}", n),
            });
        }
        seen[i] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedSource {
        order: Vec<usize>,
    }

    #[async_trait]
    impl RandomSource for FixedSource {
        async fn permutation(&self, _n: usize) -> Result<Vec<usize>> {
            Ok(self.order.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl RandomSource for FailingSource {
        async fn permutation(&self, _n: usize) -> Result<Vec<usize>> {
            Err(SantaError::RandomOrgError {
                message: "Parameter 'apiKey' is malformed".to_string(),
            })
        }
    }

    fn roster(names: &[&str]) -> Vec<Participant> {
        names
            .iter()
            .map(|n| Participant::new(n.to_string(), format!("{}@example.com", n.to_lowercase())))
            .collect()
    }

    #[tokio::test]
    async fn empty_roster_yields_empty_assignment() {
        let source = FixedSource { order: vec![] };
        let pairs = assign(&[], &source).await.unwrap();
        assert!(pairs.is_empty());
    }

    #[tokio::test]
    async fn single_participant_yields_empty_assignment() {
        let source = FixedSource { order: vec![0] };
        let pairs = assign(&roster(&["A"]), &source).await.unwrap();
        assert!(pairs.is_empty());
    }

    #[tokio::test]
    async fn source_failure_yields_no_assignment() {
        let source = FailingSource;
        let result = assign(&roster(&["A", "B", "C"]), &source).await;
        assert!(matches!(result, Err(SantaError::RandomOrgError { .. })));
    }

    #[test]
    fn fixed_point_at_start_swaps_with_successor() {
        // [A, B, C] with order [0, 2, 1]: receivers start as [A, C, B];
        // A draws itself, so receivers[0] and receivers[1] swap.
        let participants = roster(&["A", "B", "C"]);
        let pairs = pair_by_order(&participants, &[0, 2, 1]).unwrap();

        let drawn: Vec<(&str, &str)> = pairs
            .iter()
            .map(|p| (p.giver.name.as_str(), p.receiver.name.as_str()))
            .collect();
        assert_eq!(drawn, vec![("A", "C"), ("B", "A"), ("C", "B")]);
    }

    #[test]
    fn identity_order_of_two_resolves_in_one_swap() {
        // Both positions self-mapped; the swap at index 0 fixes index 1 too.
        let participants = roster(&["A", "B"]);
        let pairs = pair_by_order(&participants, &[0, 1]).unwrap();

        let drawn: Vec<(&str, &str)> = pairs
            .iter()
            .map(|p| (p.giver.name.as_str(), p.receiver.name.as_str()))
            .collect();
        assert_eq!(drawn, vec![("A", "B"), ("B", "A")]);
    }

    #[test]
    fn identity_order_resolves_with_wraparound() {
        let participants = roster(&["A", "B", "C", "D"]);
        let pairs = pair_by_order(&participants, &[0, 1, 2, 3]).unwrap();

        for p in &pairs {
            assert_ne!(p.giver.email, p.receiver.email);
        }
    }

    #[test]
    fn receivers_are_a_permutation_of_participants() {
        let participants = roster(&["A", "B", "C", "D", "E"]);
        let pairs = pair_by_order(&participants, &[4, 0, 2, 1, 3]).unwrap();

        assert_eq!(pairs.len(), participants.len());

        let mut givers: Vec<&str> = pairs.iter().map(|p| p.giver.email.as_str()).collect();
        let mut receivers: Vec<&str> = pairs.iter().map(|p| p.receiver.email.as_str()).collect();
        let mut expected: Vec<&str> = participants.iter().map(|p| p.email.as_str()).collect();
        givers.sort();
        receivers.sort();
        expected.sort();

        assert_eq!(givers, expected);
        assert_eq!(receivers, expected);
    }

    #[test]
    fn no_self_pairing_after_repair() {
        let participants = roster(&["A", "B", "C", "D", "E", "F"]);
        // A handful of shapes with fixed points in different spots.
        let orders: [&[usize]; 4] = [
            &[0, 1, 2, 3, 4, 5],
            &[1, 0, 2, 3, 5, 4],
            &[5, 1, 3, 2, 4, 0],
            &[0, 2, 1, 4, 3, 5],
        ];

        for order in orders {
            let pairs = pair_by_order(&participants, order).unwrap();
            for p in &pairs {
                assert_ne!(p.giver.email, p.receiver.email, "order {:?}", order);
            }
        }
    }

    #[test]
    fn same_order_gives_same_assignment() {
        let participants = roster(&["A", "B", "C", "D"]);
        let first = pair_by_order(&participants, &[2, 0, 3, 1]).unwrap();
        let second = pair_by_order(&participants, &[2, 0, 3, 1]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_wrong_length_sequence() {
        let participants = roster(&["A", "B", "C"]);
        let result = pair_by_order(&participants, &[0, 1]);
        assert!(matches!(result, Err(SantaError::AssignmentError { .. })));
    }

    #[test]
    fn rejects_repeated_indices() {
        let participants = roster(&["A", "B", "C"]);
        let result = pair_by_order(&participants, &[0, 0, 1]);
        assert!(matches!(result, Err(SantaError::AssignmentError { .. })));
    }

    #[test]
    fn rejects_out_of_range_indices() {
        let participants = roster(&["A", "B", "C"]);
        let result = pair_by_order(&participants, &[0, 1, 3]);
        assert!(matches!(result, Err(SantaError::AssignmentError { .. })));
    }
}
