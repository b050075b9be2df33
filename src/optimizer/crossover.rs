use crate::cipher::Key;
use fastrand::Rng;

// Order Crossover (OX)
pub fn order_crossover(p1: &Key, p2: &Key, rng: &mut Rng) -> Key {
    let len = p1.len();
    if len < 2 || p2.len() != len {
        return p1.clone();
    }

    // Two distinct cut points, a < b
    let x = rng.usize(0..len);
    let mut y = rng.usize(0..len - 1);
    if y >= x {
        y += 1;
    }
    let (a, b) = if x < y { (x, y) } else { (y, x) };

    order_crossover_at(p1, p2, a, b)
}

/// Copies `p1[a..b]` into the child and fills the remaining positions,
/// left to right, with `p2`'s values in `p2`'s order.
pub fn order_crossover_at(p1: &Key, p2: &Key, a: usize, b: usize) -> Key {
    let len = p1.len();
    let mut child = vec![0usize; len];
    let mut placed = vec![false; len + 1];

    for i in a..b {
        let gene = p1.ranks()[i];
        child[i] = gene;
        placed[gene] = true;
    }

    let mut donor = p2.ranks().iter().filter(|&&g| !placed[g]);
    for i in (0..a).chain(b..len) {
        if let Some(&gene) = donor.next() {
            child[i] = gene;
        }
    }

    Key::from_ranks_unchecked(child)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn key(ranks: &[usize]) -> Key {
        Key::new(ranks.to_vec()).unwrap()
    }

    #[test]
    fn test_known_cut() {
        let p1 = key(&[1, 2, 3, 4, 5, 6]);
        let p2 = key(&[6, 5, 4, 3, 2, 1]);
        // Slice [2,4) = 3,4 ; rest from p2 order: 6,5,2,1
        let child = order_crossover_at(&p1, &p2, 2, 4);
        assert_eq!(child.ranks(), &[6, 5, 3, 4, 2, 1]);
    }

    #[test]
    fn test_identical_parents() {
        let mut rng = Rng::with_seed(3);
        let p = key(&[3, 1, 4, 2]);
        assert_eq!(order_crossover(&p, &p, &mut rng), p);
    }

    #[test]
    fn test_single_column() {
        let mut rng = Rng::with_seed(3);
        let p = key(&[1]);
        assert_eq!(order_crossover(&p, &p, &mut rng), p);
    }

    proptest! {
        #[test]
        fn prop_child_is_permutation(seed in any::<u64>(), len in 2usize..14) {
            let mut rng = Rng::with_seed(seed);
            let p1 = crate::optimizer::mutation::random_key(&mut rng, len);
            let p2 = crate::optimizer::mutation::random_key(&mut rng, len);
            let child = order_crossover(&p1, &p2, &mut rng);
            prop_assert!(Key::new(child.ranks().to_vec()).is_ok(), "child {:?}", child);
        }
    }
}
