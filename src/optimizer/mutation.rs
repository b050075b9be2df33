use crate::cipher::Key;
use fastrand::Rng;

/// Uniformly random key of the given width.
pub fn random_key(rng: &mut Rng, len: usize) -> Key {
    let mut ranks: Vec<usize> = (1..=len).collect();
    rng.shuffle(&mut ranks);
    Key::from_ranks_unchecked(ranks)
}

/// Two distinct positions drawn uniformly, or `None` for keys under two columns.
pub fn pick_pair(rng: &mut Rng, len: usize) -> Option<(usize, usize)> {
    if len < 2 {
        return None;
    }
    let a = rng.usize(0..len);
    let mut b = rng.usize(0..len - 1);
    if b >= a {
        b += 1;
    }
    Some((a, b))
}

/// Neighbour of `key` with two random positions exchanged.
pub fn swap_random_positions(key: &Key, rng: &mut Rng) -> Key {
    let mut next = key.clone();
    mutate(&mut next, rng);
    next
}

pub fn mutate(key: &mut Key, rng: &mut Rng) {
    if let Some((a, b)) = pick_pair(rng, key.len()) {
        key.swap(a, b);
    }
}
