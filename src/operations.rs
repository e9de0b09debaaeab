//! Houses the `calculate` function and the four set operations it dispatches
//! to. Every operation is order preserving: a track appears at most once in
//! the result, at the position where it was first met, scanning `a` and then
//! (for `union` and `xor`) `b`. Tracks are compared by exact string equality.

use crate::args::OpName;
use crate::set::TrackSet;
use crate::track::Track;

/// Calculates the set operation named by `operation`, treating the track
/// lists `a` and `b` as sets:
///
/// * `OpName::Union` returns the tracks that occur in either list,
/// * `OpName::Intersect` returns the tracks of `a` that also occur in `b`,
/// * `OpName::Diff` returns the tracks of `a` that don't occur in `b`, and
/// * `OpName::Xor` returns the tracks that occur in exactly one of the lists.
#[must_use]
pub fn calculate(operation: OpName, a: &[Track], b: &[Track]) -> Vec<Track> {
    match operation {
        OpName::Union => union(a, b),
        OpName::Intersect => intersect(a, b),
        OpName::Diff => diff(a, b),
        OpName::Xor => xor(a, b),
    }
}

/// `Union` doesn't need bookkeeping, so we use the unit type as its bookkeeping
/// value.
#[must_use]
pub fn union(a: &[Track], b: &[Track]) -> Vec<Track> {
    let mut set = TrackSet::from_tracks(a, ());
    for track in b {
        set.insert(track, ());
    }
    set.into_tracks()
}

/// For `Intersect`, the bookkeeping value is `true` once the track has been
/// seen in `b`.
#[must_use]
pub fn intersect(a: &[Track], b: &[Track]) -> Vec<Track> {
    let mut set = TrackSet::from_tracks(a, false);
    for track in b {
        if let Some(seen_in_b) = set.get_mut(track) {
            *seen_in_b = true;
        }
    }
    set.retain(|seen_in_b| seen_in_b);
    set.into_tracks()
}

/// For `Diff`, the bookkeeping value of `true` means we've seen the track only
/// in `a`, and `false` that the track is present in `b` as well.
#[must_use]
pub fn diff(a: &[Track], b: &[Track]) -> Vec<Track> {
    let mut set = TrackSet::from_tracks(a, true);
    for track in b {
        if let Some(keepme) = set.get_mut(track) {
            *keepme = false;
        }
    }
    set.retain(|keepme| keepme);
    set.into_tracks()
}

/// Which operand of `xor` a track has been found in
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum FoundIn {
    A,
    B,
    Both,
}

/// For `Xor`, the bookkeeping value records which operands a track has been
/// found in. Tracks first found in `b` are appended after all of `a`'s, so the
/// survivors come out in first-occurrence order over `a` followed by `b`. A
/// track repeated within one operand is still found in just that operand.
#[must_use]
pub fn xor(a: &[Track], b: &[Track]) -> Vec<Track> {
    let mut set = TrackSet::from_tracks(a, FoundIn::A);
    for track in b {
        match set.get_mut(track) {
            None => set.insert(track, FoundIn::B),
            Some(found_in) => {
                if *found_in == FoundIn::A {
                    *found_in = FoundIn::Both;
                }
            }
        }
    }
    set.retain(|found_in| found_in != FoundIn::Both);
    set.into_tracks()
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use std::collections::HashSet;

    use self::OpName::*;

    fn tracks(names: &[&str]) -> Vec<Track> {
        names.iter().map(|&n| Track::from(n)).collect()
    }

    fn calc(operation: OpName, a: &[&str], b: &[&str]) -> Vec<Track> {
        calculate(operation, &tracks(a), &tracks(b))
    }

    fn dedup(a: &[Track]) -> Vec<Track> {
        a.iter().unique().cloned().collect()
    }

    #[test]
    fn results_for_each_operation() {
        let a = ["x", "y", "z"];
        let b = ["z", "w"];
        assert_eq!(calc(Union, &a, &b), tracks(&["x", "y", "z", "w"]), "for {Union:?}");
        assert_eq!(calc(Intersect, &a, &b), tracks(&["z"]), "for {Intersect:?}");
        assert_eq!(calc(Diff, &a, &b), tracks(&["x", "y"]), "for {Diff:?}");
        assert_eq!(calc(Xor, &a, &b), tracks(&["x", "y", "w"]), "for {Xor:?}");
    }

    #[test]
    fn intersect_keeps_the_order_of_the_first_operand() {
        let a = ["a", "b", "c"];
        let b = ["c", "d", "b"];
        assert_eq!(calc(Intersect, &a, &b), tracks(&["b", "c"]));
        assert_eq!(calc(Intersect, &b, &a), tracks(&["c", "b"]));
    }

    #[test]
    fn duplicates_within_an_operand_appear_once_at_their_first_position() {
        let a = ["x", "y", "x", "z", "y"];
        let b = ["w", "z", "w", "v"];
        assert_eq!(calc(Union, &a, &b), tracks(&["x", "y", "z", "w", "v"]));
        assert_eq!(calc(Intersect, &a, &b), tracks(&["z"]));
        assert_eq!(calc(Diff, &a, &b), tracks(&["x", "y"]));
        assert_eq!(calc(Xor, &a, &b), tracks(&["x", "y", "w", "v"]));
    }

    #[test]
    fn comparison_is_exact() {
        let a = ["Song.mp3", "/music/a.mp3", "b.mp3"];
        let b = ["song.mp3", "/music/./a.mp3", "b.mp3"];
        assert_eq!(calc(Intersect, &a, &b), tracks(&["b.mp3"]));
    }

    #[test]
    fn empty_operands() {
        let b = ["p", "q", "p"];
        for op in [Union, Intersect, Diff, Xor] {
            assert_eq!(calc(op, &[], &[]), Vec::<Track>::new(), "for {op:?}");
        }
        assert_eq!(calc(Union, &[], &b), tracks(&["p", "q"]));
        assert_eq!(calc(Xor, &[], &b), tracks(&["p", "q"]));
        assert_eq!(calc(Intersect, &[], &b), Vec::<Track>::new());
        assert_eq!(calc(Diff, &b, &[]), tracks(&["p", "q"]));
        assert_eq!(calc(Intersect, &b, &[]), Vec::<Track>::new());
    }

    #[test]
    fn given_the_same_operand_twice() {
        let a = tracks(&["xxx", "abc", "xxx", "yyy", "abc"]);
        assert_eq!(union(&a, &a), dedup(&a));
        assert_eq!(intersect(&a, &a), dedup(&a));
        assert_eq!(diff(&a, &a), Vec::<Track>::new());
        assert_eq!(xor(&a, &a), Vec::<Track>::new());
    }

    #[test]
    fn operands_are_left_alone() {
        let a = tracks(&["b", "a", "b"]);
        let b = tracks(&["a", "c"]);
        let (a_before, b_before) = (a.clone(), b.clone());
        for op in [Union, Intersect, Diff, Xor] {
            let _ = calculate(op, &a, &b);
        }
        assert_eq!((a, b), (a_before, b_before));
    }

    // Every pair of lists of length 0..=3 over a three-track alphabet,
    // checked against a direct restatement of each operation.
    #[test]
    fn every_small_pair_of_operands_gives_the_expected_result() {
        let alphabet = ["p", "q", "r"];
        let mut lists: Vec<Vec<Track>> = vec![Vec::new()];
        for len in 1..=3 {
            for names in (0..len).map(|_| alphabet.iter()).multi_cartesian_product() {
                lists.push(names.into_iter().map(|&n| Track::from(n)).collect());
            }
        }

        for (a, b) in lists.iter().cartesian_product(lists.iter()) {
            let in_a: HashSet<&Track> = a.iter().collect();
            let in_b: HashSet<&Track> = b.iter().collect();
            let a_then_b = a.iter().chain(b.iter());

            let expected_union = dedup(&a_then_b.clone().cloned().collect::<Vec<_>>());
            let expected_intersect: Vec<Track> =
                a.iter().unique().filter(|t| in_b.contains(t)).cloned().collect();
            let expected_diff: Vec<Track> =
                a.iter().unique().filter(|t| !in_b.contains(t)).cloned().collect();
            let expected_xor: Vec<Track> = a_then_b
                .unique()
                .filter(|t| in_a.contains(t) != in_b.contains(t))
                .cloned()
                .collect();

            assert_eq!(union(a, b), expected_union, "union of {a:?} and {b:?}");
            assert_eq!(intersect(a, b), expected_intersect, "intersect of {a:?} and {b:?}");
            assert_eq!(diff(a, b), expected_diff, "diff of {a:?} and {b:?}");
            assert_eq!(xor(a, b), expected_xor, "xor of {a:?} and {b:?}");
        }
    }
}
