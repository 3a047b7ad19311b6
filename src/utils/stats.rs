//! Rank-based classification of linear systems & solve statistics.

/// How many solutions `A·x = b` has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolutionType {
    /// `rank(A) == rank([A|b]) == n`
    UniqueSolution,
    /// `rank(A) == rank([A|b]) < n`
    InfiniteSolutions,
    /// `rank(A) < rank([A|b])`: the system is inconsistent.
    NoSolution,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveStats {
    pub rank: usize,
    pub augmented_rank: usize,
    pub variables: usize,
    pub solution_type: SolutionType,
}

impl SolveStats {
    /// Classify from the ranks of the coefficient and augmented matrices.
    pub fn classify(rank: usize, augmented_rank: usize, variables: usize) -> Self {
        let solution_type = if rank < augmented_rank {
            SolutionType::NoSolution
        } else if rank == variables {
            SolutionType::UniqueSolution
        } else {
            SolutionType::InfiniteSolutions
        };
        SolveStats {
            rank,
            augmented_rank,
            variables,
            solution_type,
        }
    }
}
