/// Use cases module containing application business logic orchestration
mod analyse_call_graphs;
mod generate_call_graphs;
mod select_artefacts;

pub use analyse_call_graphs::AnalyseCallGraphsUseCase;
pub use generate_call_graphs::GenerateCallGraphsUseCase;
pub use select_artefacts::SelectArtefactsUseCase;
