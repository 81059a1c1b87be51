use crate::model::Snapshot;

/// A simplex vertex: a point, its ordering value, and (when evaluation
/// succeeded) the raw objective with the model snapshot.
///
/// `value` is the transformed objective used for ordering, so the same
/// search handles minimization and maximization. Assumed-worse vertices
/// carry `f64::INFINITY` and no evaluation.
#[derive(Debug)]
pub(super) struct Vertex<I, O, const N: usize> {
    pub x: [f64; N],
    pub value: f64,
    pub eval: Option<(f64, Snapshot<I, O>)>,
}

impl<I, O, const N: usize> Vertex<I, O, N> {
    /// A vertex ordered behind every successfully evaluated point.
    pub fn assumed_worst(x: [f64; N]) -> Self {
        Self {
            x,
            value: f64::INFINITY,
            eval: None,
        }
    }
}

/// Largest coordinate distance from the best vertex to any other vertex.
///
/// Callers must pass a simplex sorted by ascending value.
pub(super) fn diameter<I, O, const N: usize>(simplex: &[Vertex<I, O, N>]) -> f64 {
    let best = &simplex[0].x;
    simplex[1..]
        .iter()
        .map(|v| {
            v.x.iter()
                .zip(best)
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max)
        })
        .fold(0.0, f64::max)
}

/// Objective spread between the worst and best vertices of a sorted simplex.
pub(super) fn spread<I, O, const N: usize>(simplex: &[Vertex<I, O, N>]) -> f64 {
    simplex[simplex.len() - 1].value - simplex[0].value
}

/// Centroid of all vertices except the worst, for a sorted simplex.
pub(super) fn centroid<I, O, const N: usize>(simplex: &[Vertex<I, O, N>]) -> [f64; N] {
    let mut c = [0.0; N];
    let n = simplex.len() - 1;
    for v in &simplex[..n] {
        for (ci, xi) in c.iter_mut().zip(&v.x) {
            *ci += xi;
        }
    }
    for ci in &mut c {
        *ci /= n as f64;
    }
    c
}

/// The point `from + t * (toward - from)`.
///
/// Negative `t` moves away from `toward`: reflection is `t = -1` through
/// the centroid, expansion `t = -2`, and contractions use `t = 0.5`.
pub(super) fn mix<const N: usize>(from: &[f64; N], toward: &[f64; N], t: f64) -> [f64; N] {
    let mut x = [0.0; N];
    for i in 0..N {
        x[i] = from[i] + t * (toward[i] - from[i]);
    }
    x
}
