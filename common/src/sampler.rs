//! 随机抽取模块

use rand::seq::SliceRandom;
use rand::Rng;

/// 不放回地随机抽取 `min(count, items.len())` 个成语
///
/// 结果顺序不保证与原列表一致。
pub fn sample<R: Rng + ?Sized>(items: &[String], count: u32, rng: &mut R) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }
    let amount = (count as usize).min(items.len());
    let picked: Vec<String> = items.choose_multiple(rng, amount).cloned().collect();

    tracing::debug!(requested = count, picked = picked.len(), "sampled items");
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    fn idioms(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("成语{}", i)).collect()
    }

    #[test]
    fn test_sample_size_is_min() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = idioms(10);
        for count in [0, 1, 5, 10, 11, 1000] {
            let picked = sample(&items, count, &mut rng);
            assert_eq!(picked.len(), (count as usize).min(items.len()));
        }
    }

    #[test]
    fn test_sample_is_subset_without_duplicates() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = idioms(30);
        let source: HashSet<&String> = items.iter().collect();

        for _ in 0..50 {
            let picked = sample(&items, 12, &mut rng);
            let unique: HashSet<&String> = picked.iter().collect();
            assert_eq!(unique.len(), picked.len());
            assert!(picked.iter().all(|p| source.contains(p)));
        }
    }

    #[test]
    fn test_sample_empty_items() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample(&[], 20, &mut rng).is_empty());
        assert!(sample(&[], 0, &mut rng).is_empty());
    }

    #[test]
    fn test_count_larger_than_items() {
        let mut rng = StdRng::seed_from_u64(3);
        let items = idioms(4);
        let mut picked = sample(&items, 20, &mut rng);
        picked.sort();
        let mut expected = items.clone();
        expected.sort();
        assert_eq!(picked, expected);
    }

    #[test]
    fn test_same_seed_same_result() {
        let items = idioms(50);
        let a = sample(&items, 10, &mut StdRng::seed_from_u64(99));
        let b = sample(&items, 10, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_roughly_uniform() {
        // 5个里抽1个，重复 5000 次，每个约 1000 次
        let mut rng = StdRng::seed_from_u64(2024);
        let items = idioms(5);
        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..5000 {
            for item in sample(&items, 1, &mut rng) {
                *counts.entry(item).or_default() += 1;
            }
        }
        assert_eq!(counts.len(), 5);
        for (_, n) in counts {
            assert!((800..=1200).contains(&n), "偏差过大: {}", n);
        }
    }
}
