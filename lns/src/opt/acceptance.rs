use rand::Rng;

/// Linear cooling schedule: `initial` at the first iteration, approaching 0 at the last.
pub fn temperature(initial: f32, iteration: usize, max_iterations: usize) -> f32 {
    if max_iterations == 0 {
        return initial;
    }
    initial * (1.0 - iteration as f32 / max_iterations as f32)
}

/// Probability of the simulated annealing criterion to accept a candidate with `fitness`
/// in place of one with `prev_fitness`.
pub fn acceptance_probability(fitness: f32, prev_fitness: f32, temperature: f32) -> f32 {
    if fitness >= prev_fitness {
        1.0
    } else if temperature <= 0.0 {
        0.0
    } else {
        f32::exp(-(prev_fitness - fitness) / temperature)
    }
}

/// Simulated annealing criterion: non-regressions are always accepted, a regression only if its
/// acceptance probability exceeds a uniform draw from [0, 1).
pub fn sa_accept(fitness: f32, prev_fitness: f32, temperature: f32, rng: &mut impl Rng) -> bool {
    if fitness >= prev_fitness {
        return true;
    }
    acceptance_probability(fitness, prev_fitness, temperature) > rng.random::<f32>()
}
