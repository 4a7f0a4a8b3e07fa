/// Control actions supported by the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the latest iterate.
    StopEarly,
}
