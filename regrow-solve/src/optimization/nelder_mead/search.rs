use crate::{model::Model, observe::Observer, optimization::OptimizationProblem};

use super::{
    Action, Config, Error, Event, Solution,
    simplex::{Vertex, centroid, diameter, mix, spread},
    solution::Status,
};

use crate::optimization::evaluate;

/// Core Nelder–Mead implementation.
///
/// The `transform` function is applied to objective values before
/// comparison, allowing the same algorithm to handle both minimization
/// (transform = identity) and maximization (transform = negation).
pub(super) fn search<M, P, Obs, F, const N: usize>(
    model: &M,
    problem: &P,
    seed: [f64; N],
    config: &Config,
    mut observer: Obs,
    transform: F,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
    F: Fn(f64) -> f64,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    for &value in &seed {
        if !value.is_finite() {
            return Err(Error::NonFiniteSeed { value });
        }
    }

    // Initial simplex: the seed plus one offset vertex per coordinate.
    let mut simplex: Vec<Vertex<M::Input, M::Output, N>> = Vec::with_capacity(N + 1);
    for i in 0..=N {
        let mut x = seed;
        if i > 0 {
            x[i - 1] += config.initial_step;
        }
        match eval_and_observe(model, problem, x, 0, &mut observer, &transform)? {
            Outcome::Vertex(vertex) => simplex.push(vertex),
            Outcome::StopEarly => {
                return into_solution(simplex, Status::StoppedByObserver, 0);
            }
        }
    }

    for iter in 1..=config.max_iters {
        simplex.sort_by(|a, b| a.value.total_cmp(&b.value));

        if diameter(&simplex) <= config.x_tol || spread(&simplex) <= config.f_tol {
            return into_solution(simplex, Status::Converged, iter);
        }

        let center = centroid(&simplex);
        let worst_x = simplex[N].x;

        let reflected = mix(&center, &worst_x, -1.0);
        let refl = match eval_and_observe(model, problem, reflected, iter, &mut observer, &transform)?
        {
            Outcome::Vertex(vertex) => vertex,
            Outcome::StopEarly => {
                return into_solution(simplex, Status::StoppedByObserver, iter);
            }
        };

        if refl.value < simplex[0].value {
            let expanded = mix(&center, &worst_x, -2.0);
            let exp =
                match eval_and_observe(model, problem, expanded, iter, &mut observer, &transform)? {
                    Outcome::Vertex(vertex) => vertex,
                    Outcome::StopEarly => {
                        return into_solution(simplex, Status::StoppedByObserver, iter);
                    }
                };
            simplex[N] = if exp.value < refl.value { exp } else { refl };
        } else if refl.value < simplex[N - 1].value {
            simplex[N] = refl;
        } else {
            // Contract outside (toward the reflection) if it improved on the
            // worst vertex, otherwise inside (toward the worst vertex).
            let toward = if refl.value < simplex[N].value {
                refl.x
            } else {
                worst_x
            };
            let contracted = mix(&center, &toward, 0.5);
            let contr =
                match eval_and_observe(model, problem, contracted, iter, &mut observer, &transform)?
                {
                    Outcome::Vertex(vertex) => vertex,
                    Outcome::StopEarly => {
                        return into_solution(simplex, Status::StoppedByObserver, iter);
                    }
                };

            if contr.value < refl.value.min(simplex[N].value) {
                simplex[N] = contr;
            } else {
                // Shrink every non-best vertex toward the best.
                let best_x = simplex[0].x;
                for i in 1..=N {
                    let x = mix(&best_x, &simplex[i].x, 0.5);
                    match eval_and_observe(model, problem, x, iter, &mut observer, &transform)? {
                        Outcome::Vertex(vertex) => simplex[i] = vertex,
                        Outcome::StopEarly => {
                            return into_solution(simplex, Status::StoppedByObserver, iter);
                        }
                    }
                }
            }
        }
    }

    into_solution(simplex, Status::MaxIters, config.max_iters)
}

enum Outcome<I, O, const N: usize> {
    Vertex(Vertex<I, O, N>),
    StopEarly,
}

/// Evaluate at `x`, emit an event, and apply the observer's action.
fn eval_and_observe<M, P, Obs, F, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
    iter: usize,
    observer: &mut Obs,
    transform: &F,
) -> Result<Outcome<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
    F: Fn(f64) -> f64,
{
    match evaluate(model, problem, x) {
        Ok(eval) => {
            let action = observer.observe(&Event::Evaluated {
                iter,
                x,
                objective: eval.objective,
            });
            match action {
                Some(Action::StopEarly) => Ok(Outcome::StopEarly),
                Some(Action::AssumeWorse) => Ok(Outcome::Vertex(Vertex::assumed_worst(x))),
                None => {
                    if !eval.objective.is_finite() {
                        return Err(Error::NonFiniteObjective {
                            x: x.to_vec(),
                            objective: eval.objective,
                        });
                    }
                    Ok(Outcome::Vertex(Vertex {
                        x,
                        value: transform(eval.objective),
                        eval: Some((eval.objective, eval.snapshot)),
                    }))
                }
            }
        }
        Err(e) => {
            let action = observer.observe(&Event::EvalFailed {
                iter,
                x,
                error: &e,
            });
            match action {
                Some(Action::StopEarly) => Ok(Outcome::StopEarly),
                Some(Action::AssumeWorse) => Ok(Outcome::Vertex(Vertex::assumed_worst(x))),
                None => Err(e.into()),
            }
        }
    }
}

/// Builds the solution from the best successfully evaluated vertex.
fn into_solution<I, O, const N: usize>(
    simplex: Vec<Vertex<I, O, N>>,
    status: Status,
    iters: usize,
) -> Result<Solution<I, O, N>, Error> {
    let best = simplex
        .into_iter()
        .min_by(|a, b| a.value.total_cmp(&b.value))
        .ok_or(Error::NoViablePoint)?;
    let (objective, snapshot) = best.eval.ok_or(Error::NoViablePoint)?;

    Ok(Solution {
        status,
        x: best.x,
        objective,
        snapshot,
        iters,
    })
}
