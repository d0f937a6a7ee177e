pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Layer assignment reached a round in which no candidate had all of its
    /// prerequisites assigned while nodes were still waiting: the input contains a
    /// cycle. `residual` lists the unassigned nodes in graph order; every cycle
    /// member is among them, alongside nodes only reachable through a cycle.
    #[error("graph is not acyclic: {} node(s) cannot be assigned a layer ({})", .residual.len(), .residual.join(", "))]
    CycleDetected { residual: Vec<String> },

    #[error("unknown layout direction: {value:?} (expected \"from-source\" or \"from-sink\")")]
    UnknownDirection { value: String },
}
