use thiserror::Error;

/// Failures raised by a pairing run.
///
/// None of these occur for well-formed input; they signal a defect in how the
/// preference lists were built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PairingError {
    #[error("Proposer {proposer} exhausted {candidates} candidates without engaging")]
    ProposerExhausted { proposer: usize, candidates: usize },
}
