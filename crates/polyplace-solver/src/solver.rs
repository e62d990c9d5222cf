use std::collections::HashMap;

use polyplace_core::{Digit, DigitSet, Grid};

use crate::technique::{self, BoxedTechnique};

/// Statistics collected while solving.
///
/// Tracks how many times each technique was applied, keyed by technique
/// name, plus the number of search assumptions made and rolled back.
///
/// # Examples
///
/// ```
/// use polyplace_core::Grid;
/// use polyplace_solver::Solver;
///
/// let solver = Solver::new();
/// let mut grid: Grid =
///     "53__7____6__195____98____6_8___6___34__8_3__17___2___6_6____28____419__5____8__79"
///         .parse()?;
///
/// let (solved, stats) = solver.solve(&mut grid);
/// assert!(solved);
/// println!("naked singles: {}", stats.count("Naked Single"));
/// println!("assumptions:   {}", stats.assumptions());
/// # Ok::<(), polyplace_core::ParseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolveStats {
    applications: HashMap<&'static str, usize>,
    total_steps: usize,
    assumptions: usize,
    rollbacks: usize,
}

impl SolveStats {
    /// Returns how many times the named technique was applied.
    ///
    /// Techniques that never ran report `0`.
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.applications.get(name).copied().unwrap_or(0)
    }

    /// Returns the total number of technique applications.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Returns the number of trial placements made by the search.
    ///
    /// A puzzle solved by deduction alone reports `0`.
    #[must_use]
    pub fn assumptions(&self) -> usize {
        self.assumptions
    }

    /// Returns the number of trial placements that failed and were undone.
    #[must_use]
    pub fn rollbacks(&self) -> usize {
        self.rollbacks
    }

    /// Returns `true` if any technique was applied at least once.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.total_steps > 0
    }
}

/// Receives search events as trial placements are made and undone.
///
/// The solver reports every assumption the backtracking search makes, which
/// is useful for tracing or measuring search behavior. Use `()` as the
/// observer to ignore all events.
///
/// # Examples
///
/// ```
/// use polyplace_core::Digit;
/// use polyplace_solver::SearchObserver;
///
/// #[derive(Default)]
/// struct Trace(Vec<(usize, Digit)>);
///
/// impl SearchObserver for Trace {
///     fn assumed(&mut self, index: usize, digit: Digit) {
///         self.0.push((index, digit));
///     }
///
///     fn retracted(&mut self, _index: usize, _digit: Digit) {}
/// }
/// ```
pub trait SearchObserver {
    /// Called when the search places `digit` at `index` on a trial basis.
    fn assumed(&mut self, index: usize, digit: Digit);

    /// Called when that trial placement failed and was rolled back.
    fn retracted(&mut self, index: usize, digit: Digit);
}

/// Ignores all search events.
impl SearchObserver for () {
    fn assumed(&mut self, _index: usize, _digit: Digit) {}

    fn retracted(&mut self, _index: usize, _digit: Digit) {}
}

/// A solver combining technique-based deduction with backtracking search.
///
/// The solver applies its techniques to a fixpoint, then, if the grid is
/// still unfinished, picks the lowest-indexed empty cell and tries each of
/// its candidates in ascending order, recursing after every trial placement
/// and rolling back the ones that fail. A puzzle is reported unsolvable only
/// after the search has exhausted every candidate.
///
/// # Examples
///
/// ```
/// use polyplace_core::Grid;
/// use polyplace_solver::Solver;
///
/// let solver = Solver::new();
/// let mut grid: Grid =
///     "53__7____6__195____98____6_8___6___34__8_3__17___2___6_6____28____419__5____8__79"
///         .parse()?;
///
/// let (solved, stats) = solver.solve(&mut grid);
/// assert!(solved);
/// // This puzzle falls to deduction alone
/// assert_eq!(stats.assumptions(), 0);
/// # Ok::<(), polyplace_core::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    techniques: Vec<BoxedTechnique>,
}

impl Solver {
    /// Creates a solver with the fundamental techniques.
    #[must_use]
    pub fn new() -> Self {
        Self {
            techniques: technique::fundamental_techniques(),
        }
    }

    /// Creates a solver with the specified techniques.
    ///
    /// Techniques are tried in the order they appear in the vector. An empty
    /// vector leaves the solver with pure backtracking search.
    #[must_use]
    pub fn with_techniques(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Returns the configured techniques in application order.
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Applies one step of deduction by trying each technique in order.
    ///
    /// The first technique whose sweep fills at least one cell ends the
    /// step, so the next step starts from the easiest technique again.
    ///
    /// # Returns
    ///
    /// * `true` - A technique made progress
    /// * `false` - No technique could make progress
    pub fn step(&self, grid: &mut Grid, stats: &mut SolveStats) -> bool {
        for technique in &self.techniques {
            if technique.apply(grid) {
                *stats.applications.entry(technique.name()).or_insert(0) += 1;
                stats.total_steps += 1;
                return true;
            }
        }
        false
    }

    /// Solves the grid in place, collecting fresh statistics.
    ///
    /// Returns `(solved, stats)`. When `solved` is `false` the puzzle has no
    /// solution and the grid is left at the state where the contradiction
    /// became apparent.
    pub fn solve(&self, grid: &mut Grid) -> (bool, SolveStats) {
        let mut stats = SolveStats::default();
        let solved = self.solve_with_stats(grid, &mut stats);
        (solved, stats)
    }

    /// Solves the grid in place, accumulating into an existing statistics
    /// object.
    pub fn solve_with_stats(&self, grid: &mut Grid, stats: &mut SolveStats) -> bool {
        self.solve_with_observer(grid, stats, &mut ())
    }

    /// Solves the grid in place, reporting every search event to `observer`.
    ///
    /// This is the full solving loop: check for a contradiction, check for
    /// completion, deduce to a fixpoint, and otherwise fall back to search,
    /// which recurses into this loop after every trial placement.
    pub fn solve_with_observer<O>(
        &self,
        grid: &mut Grid,
        stats: &mut SolveStats,
        observer: &mut O,
    ) -> bool
    where
        O: SearchObserver,
    {
        loop {
            if grid.has_contradiction() {
                return false;
            }
            if grid.is_filled() {
                return true;
            }
            if !self.step(grid, stats) {
                return self.branch(grid, stats, observer);
            }
        }
    }

    /// Solves a copy of the grid, returning it if a solution exists.
    #[must_use]
    pub fn solution(&self, grid: &Grid) -> Option<Grid> {
        let mut work = grid.clone();
        let (solved, _stats) = self.solve(&mut work);
        solved.then_some(work)
    }

    fn branch<O>(&self, grid: &mut Grid, stats: &mut SolveStats, observer: &mut O) -> bool
    where
        O: SearchObserver,
    {
        let Some(index) = grid.first_empty() else {
            return true;
        };
        let candidates = grid.cell(index).candidates().unwrap_or(DigitSet::EMPTY);

        let snapshot = grid.snapshot();
        for digit in candidates {
            stats.assumptions += 1;
            observer.assumed(index, digit);
            grid.place(index, digit);
            if self.solve_with_observer(grid, stats, observer) {
                return true;
            }
            stats.rollbacks += 1;
            observer.retracted(index, digit);
            grid.restore(&snapshot);
        }
        false
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
