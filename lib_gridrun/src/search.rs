use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use binary_heap_plus::{BinaryHeap, MinComparator};
use log::debug;
use num_traits::Bounded;

use crate::cost::Cost;
use crate::grid::CostGrid;
use crate::run_bounds::RunBounds;


/// The axis of a straight run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    fn perpendicular(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }
}

/// The heading of a straight run, named by the direction of travel.
///
/// North decreases the row index, West decreases the column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    fn axis(self) -> Axis {
        match self {
            Self::North | Self::South => Axis::Vertical,
            Self::East | Self::West => Axis::Horizontal,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }
}

/// The best known costs of reaching one cell, one per arrival heading.
#[derive(Debug, Clone, Copy)]
struct ArrivalCosts([Cost; 4]);

impl ArrivalCosts {
    fn unreached() -> Self {
        Self([Cost::max_value(); 4])
    }

    fn start() -> Self {
        Self([Cost::ZERO; 4])
    }

    fn get(&self, direction: Direction) -> Cost {
        self.0[direction.index()]
    }

    fn set(&mut self, direction: Direction, cost: Cost) {
        self.0[direction.index()] = cost;
    }

    /// The cheapest arrival that ended a run on the given axis.
    fn axis_min(&self, axis: Axis) -> Cost {
        match axis {
            Axis::Vertical => self.get(Direction::North).min(self.get(Direction::South)),
            Axis::Horizontal => self.get(Direction::East).min(self.get(Direction::West)),
        }
    }

    fn min(&self) -> Cost {
        self.0.iter().copied().fold(Cost::MAX, Cost::min)
    }
}

/// A pending queue entry: a cell whose arrival on the `forbidden` axis may
/// open cheaper runs on the perpendicular axis.
///
/// The start token carries no forbidden axis and opens runs on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token {
    row: usize,
    col: usize,
    forbidden: Option<Axis>,
    priority: Cost,
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Counters describing the work performed by a single search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchCounters {
    /// Tokens popped from the queue whose scans were executed.
    pub expanded_tokens: usize,
    /// Tokens discarded on pop because their cell had already been relaxed
    /// below the priority they were pushed with.
    pub stale_tokens: usize,
    /// Strict improvements written to an arrival cost.
    pub relaxed_runs: usize,
}

/// The outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "search_outcome_type")
)]
pub enum SearchOutcome {
    /// A legal path from the start to the destination exists.
    PathFound { cost: Cost },

    /// The grid and run bounds admit no legal path to the destination.
    NoPath,
}

/// The result of [`RunSearch::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub counters: SearchCounters,
}

/// A run-relaxation Dijkstra search over a cost grid.
///
/// Edges of the implicit graph are whole straight runs of between `min` and
/// `max` cells, not unit steps. The search keeps one best known cost per cell
/// and arrival heading; a run departing a cell must use the axis
/// perpendicular to the one its arrival used. The grid is owned by the
/// search for its whole lifetime.
#[derive(Debug)]
pub struct RunSearch {
    grid: CostGrid,
    bounds: RunBounds,
}

impl RunSearch {
    pub fn new(grid: CostGrid, bounds: RunBounds) -> Self {
        Self { grid, bounds }
    }

    /// Run the relaxation to queue exhaustion and reduce the destination's
    /// four arrival costs to a single outcome.
    ///
    /// The queue and the per-cell state are local to each call, so calling
    /// `solve` twice on the same value yields the same result.
    pub fn solve(&self) -> SearchResult {
        let rows = self.grid.rows();
        let cols = self.grid.cols();

        let mut cells = vec![ArrivalCosts::unreached(); rows * cols];
        cells[0] = ArrivalCosts::start();

        let mut queue: BinaryHeap<Token, MinComparator> = BinaryHeap::new_min();
        queue.push(Token {
            row: 0,
            col: 0,
            forbidden: None,
            priority: Cost::ZERO,
        });

        let mut counters = SearchCounters::default();

        while let Some(token) = queue.pop() {
            if let Some(axis) = token.forbidden {
                // The cell has been relaxed again since this token was
                // pushed, and the cheaper token was popped first.
                if cells[token.row * cols + token.col].axis_min(axis) < token.priority {
                    counters.stale_tokens += 1;
                    continue;
                }
            }

            counters.expanded_tokens += 1;

            if token.forbidden != Some(Axis::Vertical) {
                self.scan(&mut cells, &mut queue, &mut counters, &token, Direction::North);
                self.scan(&mut cells, &mut queue, &mut counters, &token, Direction::South);
            }

            if token.forbidden != Some(Axis::Horizontal) {
                self.scan(&mut cells, &mut queue, &mut counters, &token, Direction::West);
                self.scan(&mut cells, &mut queue, &mut counters, &token, Direction::East);
            }
        }

        debug!(
            "Search finished: expanded {} tokens, skipped {} stale tokens, relaxed {} runs",
            counters.expanded_tokens, counters.stale_tokens, counters.relaxed_runs
        );

        let destination = cells[rows * cols - 1].min();
        let outcome = if destination == Cost::max_value() {
            SearchOutcome::NoPath
        } else {
            SearchOutcome::PathFound { cost: destination }
        };

        SearchResult { outcome, counters }
    }

    /// Relax every legal run leaving the token's cell in one direction.
    ///
    /// The run departs from the cheapest arrival on the perpendicular axis.
    /// Costs accumulate cell by cell; each run length from `min` through
    /// `max` relaxes its own target cell, and the scan stops at the grid
    /// boundary.
    fn scan(
        &self,
        cells: &mut [ArrivalCosts],
        queue: &mut BinaryHeap<Token, MinComparator>,
        counters: &mut SearchCounters,
        token: &Token,
        direction: Direction,
    ) {
        let cols = self.grid.cols();
        let base = cells[token.row * cols + token.col].axis_min(direction.axis().perpendicular());
        // Scans only depart from cells settled on the perpendicular axis.
        debug_assert!(base < Cost::max_value());

        let mut run_cost = base;

        for length in 1..=self.bounds.max() {
            let Some((row, col)) = self.step(token.row, token.col, direction, length) else {
                return;
            };

            run_cost += Cost::from(self.grid.cost(row, col));

            // A run shorter than the minimum cannot legally end here.
            if length < self.bounds.min() {
                continue;
            }

            let arrival = &mut cells[row * cols + col];
            if run_cost < arrival.get(direction) {
                arrival.set(direction, run_cost);
                counters.relaxed_runs += 1;
                queue.push(Token {
                    row,
                    col,
                    forbidden: Some(direction.axis()),
                    priority: run_cost,
                });
            }
        }
    }

    /// The cell `distance` steps away from `(row, col)` in `direction`, or
    /// `None` if that leaves the grid.
    fn step(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
        distance: usize,
    ) -> Option<(usize, usize)> {
        match direction {
            Direction::North => row.checked_sub(distance).map(|row| (row, col)),
            Direction::South => {
                let row = row + distance;
                (row < self.grid.rows()).then_some((row, col))
            }
            Direction::West => col.checked_sub(distance).map(|col| (row, col)),
            Direction::East => {
                let col = col + distance;
                (col < self.grid.cols()).then_some((row, col))
            }
        }
    }
}

impl Display for SearchOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOutcome::PathFound { cost } => {
                write!(f, "Reached the destination with cost {cost}")
            }
            SearchOutcome::NoPath => write!(f, "Found no legal path to the destination"),
        }
    }
}
