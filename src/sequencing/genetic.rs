//! Genetic sequencing strategy.
//!
//! # Algorithm
//!
//! Permutation-encoded genetic search: tournament selection, order
//! crossover (OX), single-swap mutation, and elitism. Fitness is
//! 1000 / total route distance, so shorter routes score higher. Elitism
//! carries the best candidates unchanged into the next generation, which
//! makes the best fitness monotonically non-decreasing across
//! generations. The search always runs the full generation count; there
//! is no early-convergence exit.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{SequencedRoute, Stop};

use super::builder::SequenceBuilder;

/// Genetic search parameters.
///
/// # Examples
///
/// ```
/// use freight_routing::sequencing::GeneticConfig;
///
/// let config = GeneticConfig::default().with_seed(42).with_generations(20);
/// assert_eq!(config.generations(), 20);
/// assert_eq!(config.population_size(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneticConfig {
    population_size: usize,
    generations: usize,
    mutation_rate: f64,
    elite_size: usize,
    tournament_size: usize,
    seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.1,
            elite_size: 5,
            tournament_size: 5,
            seed: None,
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the per-child mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets how many top candidates survive unmodified each generation.
    pub fn with_elite_size(mut self, size: usize) -> Self {
        self.elite_size = size;
        self
    }

    /// Sets the tournament size for parent selection.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Seeds the search for deterministic replay.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Population size.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Generation count.
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Per-child mutation probability.
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Elite count.
    pub fn elite_size(&self) -> usize {
        self.elite_size
    }

    /// Tournament size.
    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Replay seed, if set.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// One member of the search population: a stop permutation with its
/// cached fitness. Lives only for the duration of one optimization call.
#[derive(Debug, Clone)]
struct Candidate {
    order: Vec<usize>,
    fitness: f64,
}

/// Sequences stops by genetic search over visit permutations.
///
/// The best permutation found after the full generation count is
/// converted into a [`SequencedRoute`] with the shared timing model.
pub fn genetic(stops: &[Stop], departure: DateTime<Utc>, config: &GeneticConfig) -> SequencedRoute {
    let builder = SequenceBuilder::new(stops);
    let n = stops.len();
    if n == 0 {
        return SequencedRoute::new(departure);
    }
    if n == 1 {
        return builder.build(&[0], departure, &[]);
    }

    let best = match config.seed() {
        Some(seed) => evolve(&builder, n, config, &mut StdRng::seed_from_u64(seed)).0,
        None => evolve(&builder, n, config, &mut rand::rng()).0,
    };
    builder.build(&best, departure, &[])
}

/// Runs the search, returning the best order and the best fitness
/// observed at each generation.
fn evolve<R: Rng>(
    builder: &SequenceBuilder<'_>,
    n: usize,
    config: &GeneticConfig,
    rng: &mut R,
) -> (Vec<usize>, Vec<f64>) {
    let mut population: Vec<Candidate> = (0..config.population_size().max(2))
        .map(|_| {
            let order = random_permutation(n, rng);
            let fitness = fitness_of(builder, &order);
            Candidate { order, fitness }
        })
        .collect();

    let mut history = Vec::with_capacity(config.generations());

    for _ in 0..config.generations() {
        population.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
        history.push(population[0].fitness);

        let elite = config.elite_size().min(population.len());
        let mut next: Vec<Candidate> = population[..elite].to_vec();

        while next.len() < population.len() {
            let parent_a = tournament(&population, config.tournament_size(), rng);
            let parent_b = tournament(&population, config.tournament_size(), rng);
            let mut child = order_crossover(&parent_a.order, &parent_b.order, rng);
            if rng.random_bool(config.mutation_rate().clamp(0.0, 1.0)) {
                swap_mutation(&mut child, rng);
            }
            let fitness = fitness_of(builder, &child);
            next.push(Candidate {
                order: child,
                fitness,
            });
        }
        population = next;
    }

    population.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    history.push(population[0].fitness);
    let best = population.swap_remove(0);
    (best.order, history)
}

fn fitness_of(builder: &SequenceBuilder<'_>, order: &[usize]) -> f64 {
    let distance = builder.order_distance(order);
    if distance > f64::EPSILON {
        1000.0 / distance
    } else {
        f64::INFINITY
    }
}

fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    // Fisher-Yates shuffle
    for i in (1..perm.len()).rev() {
        let j = rng.random_range(0..=i);
        perm.swap(i, j);
    }
    perm
}

fn tournament<'p, R: Rng>(
    population: &'p [Candidate],
    size: usize,
    rng: &mut R,
) -> &'p Candidate {
    let mut best = &population[rng.random_range(0..population.len())];
    for _ in 1..size.max(1) {
        let contender = &population[rng.random_range(0..population.len())];
        if contender.fitness > best.fitness {
            best = contender;
        }
    }
    best
}

/// Order crossover (OX): copy a random contiguous segment from the first
/// parent, then fill the remaining positions in second-parent order,
/// skipping duplicates.
fn order_crossover<R: Rng>(parent_a: &[usize], parent_b: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent_a.len();
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    let (start, end) = if a <= b { (a, b) } else { (b, a) };

    let mut child = vec![usize::MAX; n];
    let mut used = vec![false; n];
    for i in start..=end {
        child[i] = parent_a[i];
        used[parent_a[i]] = true;
    }

    let mut fill = (0..n).filter(|&i| !(start..=end).contains(&i));
    for &gene in parent_b {
        if used[gene] {
            continue;
        }
        if let Some(slot) = fill.next() {
            child[slot] = gene;
        }
    }
    child
}

fn swap_mutation<R: Rng>(order: &mut [usize], rng: &mut R) {
    let n = order.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    order.swap(i, j);
}
