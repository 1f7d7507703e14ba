// Plots one 3D surface per membrane mode from data/ into plots/.
use membrane_plots::app;
use membrane_plots::pipeline::Pipeline;

fn main() {
    app::run_standalone(Pipeline::Modes);
}
