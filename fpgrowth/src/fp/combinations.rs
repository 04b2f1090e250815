/// Calls `callback` with every `k`-element combination of the indices
/// `0..n`, in lexicographic order.
pub fn for_each_combination<F>(n: usize, k: usize, callback: &mut F)
where
    F: FnMut(&[usize]),
{
    if k == 0 || k > n {
        return;
    }

    let mut current = Vec::with_capacity(k);
    generate_combinations_recursive(n, k, 0, &mut current, callback);
}

fn generate_combinations_recursive<F>(
    n: usize,
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    callback: &mut F,
) where
    F: FnMut(&[usize]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    // Stop early once too few indices remain to fill the combination.
    for i in start..=(n - (k - current.len())) {
        current.push(i);
        generate_combinations_recursive(n, k, i + 1, current, callback);
        current.pop();
    }
}

/// Emits every `k`-item subset of a single-path tree, extended by `alpha`.
///
/// `path` holds (rank, count) pairs from the root down. The support of a
/// subset is the smallest count among the chosen nodes.
pub fn generate_combinations_from_path(
    path: &[(usize, usize)],
    k: usize,
    alpha: &[usize],
    result: &mut Vec<(Vec<usize>, usize)>,
) {
    for_each_combination(path.len(), k, &mut |combination: &[usize]| {
        let mut pattern = Vec::with_capacity(alpha.len() + k);
        pattern.extend_from_slice(alpha);
        pattern.extend(combination.iter().map(|&idx| path[idx].0));

        let support = combination
            .iter()
            .map(|&idx| path[idx].1)
            .min()
            .unwrap_or(0);
        result.push((pattern, support));
    });
}
