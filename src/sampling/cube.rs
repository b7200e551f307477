/// Every (r, g, b) combination of the three axis sequences.
///
/// Enumeration order is fixed: the green axis varies slowest, then red,
/// with blue fastest, one full blue sweep per (g, r) pair. The output
/// length is the product of the three axis lengths; no combination is
/// omitted and none is visited twice.
pub fn expand<T: Copy>(r_axis: &[T], g_axis: &[T], b_axis: &[T]) -> Vec<[T; 3]> {
    let mut triples = Vec::with_capacity(r_axis.len() * g_axis.len() * b_axis.len());

    for &g in g_axis {
        for &r in r_axis {
            for &b in b_axis {
                triples.push([r, g, b]);
            }
        }
    }

    triples
}
