// Plots the sparsity pattern of the stiffness matrix from data/ into plots/.
use membrane_plots::app;
use membrane_plots::pipeline::Pipeline;

fn main() {
    app::run_standalone(Pipeline::Sparsity);
}
