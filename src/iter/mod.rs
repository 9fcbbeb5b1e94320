pub mod chain;
pub mod filter;
pub mod inspect;
pub mod map;
pub mod reduce;
pub mod setup;
pub mod stop;

#[cfg(test)]
mod tests {
    use crate::*;

    fn sum(a: i64, b: i64) -> i64 {
        a + b
    }

    #[test]
    fn test_reduce() {
        let cases: Vec<(Vec<i64>, i64)> = vec![
            (vec![1, 2, 3, 4, 5], 15),
            (vec![1, 2, 3, 4, 5, 6], 21),
            (vec![1, 2, 3, 4, 5, 6, 7], 28),
            (vec![1, 2, 3, 4, 5, 6, 7, 8], 36),
            (vec![], 0),
        ];

        for (input, expected) in cases {
            assert_eq!(expected, reduce(sum, input.clone()), "reduce({:?})", input);
        }
    }

    #[test]
    fn test_parallel_reduce() {
        let cases: Vec<(Vec<i64>, i64)> = vec![
            (vec![1, 2, 3, 4, 5], 15),
            (vec![1, 2, 3, 4, 5, 6], 21),
            (vec![1, 2, 3, 4, 5, 6, 7], 28),
            (vec![1, 2, 3, 4, 5, 6, 7, 8], 36),
            (vec![], 0),
        ];

        for (input, expected) in cases {
            let result = input.clone().into_seq().reduce(sum).exec().unwrap();

            assert_eq!(expected, result, "parallel_reduce({:?})", input);
        }
    }

    #[test]
    fn test_parallel_reduce_with_more_workers_than_values() {
        let result = parallel_reduce(sum, vec![1, 2, 3, 4, 5, 6, 7, 8], 32).unwrap();

        assert_eq!(36, result);
    }

    #[test]
    fn test_worker_count_does_not_change_sum() {
        for workers in [1, 2, 5, 100] {
            let result = parallel_reduce(sum, vec![1, 2, 3, 4, 5], workers).unwrap();

            assert_eq!(15, result, "workers = {}", workers);
        }
    }

    #[test]
    fn test_driver_with_sequential_executor() {
        let seq = vec![1, 2, 3, 4, 5].into_seq();

        assert_eq!(15, seq.reduce(sum).exec_with(Sequential));
    }

    #[test]
    fn test_commutative_combiner_matches_sequential_reduce() {
        use rand::{seq::SliceRandom, thread_rng, Rng};

        let mut rng = thread_rng();

        for _ in 0..20 {
            let len = rng.gen_range(0..2000);
            let mut input = (0..len).map(|_| rng.gen_range(-1000..1000)).collect::<Vec<i64>>();
            input.shuffle(&mut rng);

            let expected = reduce(sum, input.as_slice());

            for workers in [1, 3, 16, 64] {
                let result = parallel_reduce(sum, input.as_slice(), workers).unwrap();

                assert_eq!(expected, result, "workers = {}", workers);
            }
        }
    }

    #[test]
    fn test_max_over_mapped_and_filtered_sequence() {
        let seq = (0..10_000u64)
            .into_seq()
            .filter(|x| x % 7 == 3)
            .map(|x| x * 3);

        let max = parallel_reduce(::std::cmp::max, seq, 12).unwrap();

        assert_eq!(9_999 * 3, max);
    }
}
