mod common;

use std::fs;

use common::{
    RecordingRenderer, laplacian_pattern, png_files, scratch_config, write_pattern_csv,
};
use membrane_plots::ErrorKind;
use membrane_plots::config::SparsityDims;
use membrane_plots::pipeline::run_sparsity;

#[test]
fn pattern_is_plotted_with_fixed_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let config = scratch_config(dir.path());
    // 50 x 50 grid -> 2500 unknowns, matching the default fixed dimensions
    let entries = laplacian_pattern(50);
    assert_eq!(entries.len(), 12300);
    write_pattern_csv(&config, &entries);

    let mut renderer = RecordingRenderer::default();
    let report = run_sparsity(&config, &mut renderer);

    assert!(!report.has_failures(), "{report}");
    assert_eq!(png_files(&config.paths.plots_dir), vec!["matrix_sparsity.png"]);
    let (nnz, percent) = renderer.sparsity[0];
    assert_eq!(nnz, 12300);
    let expected = (1.0 - 12300.0 / (2500.0 * 2500.0)) * 100.0;
    assert!((percent - expected).abs() < 1e-12);
}

#[test]
fn derived_dimensions_follow_data() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = scratch_config(dir.path());
    config.sparsity.dims = SparsityDims::Derived;
    write_pattern_csv(&config, &laplacian_pattern(3));

    let mut renderer = RecordingRenderer::default();
    let report = run_sparsity(&config, &mut renderer);

    assert!(!report.has_failures());
    let (nnz, percent) = renderer.sparsity[0];
    // 9 diagonal + 24 off-diagonal entries in a 9 x 9 matrix
    assert_eq!(nnz, 33);
    assert!((percent - (1.0 - 33.0 / 81.0) * 100.0).abs() < 1e-12);
}

#[test]
fn index_outside_fixed_dimensions_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let config = scratch_config(dir.path());
    write_pattern_csv(&config, &[(0, 0), (2500, 3)]);

    let mut renderer = RecordingRenderer::default();
    let report = run_sparsity(&config, &mut renderer);

    let error = report.failures().next().expect("failure recorded");
    assert_eq!(error.kind(), ErrorKind::MalformedData);
    assert!(renderer.sparsity.is_empty());
    assert!(png_files(&config.paths.plots_dir).is_empty());
}

#[test]
fn header_only_file_is_fully_sparse() {
    let dir = tempfile::tempdir().unwrap();
    let config = scratch_config(dir.path());
    write_pattern_csv(&config, &[]);

    let mut renderer = RecordingRenderer::default();
    let report = run_sparsity(&config, &mut renderer);

    assert!(!report.has_failures());
    assert_eq!(renderer.sparsity, vec![(0, 100.0)]);
}

#[test]
fn missing_and_garbled_inputs_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = scratch_config(dir.path());

    let report = run_sparsity(&config, &mut RecordingRenderer::default());
    assert_eq!(
        report.failures().next().map(|e| e.kind()),
        Some(ErrorKind::MissingFile)
    );

    fs::write(config.paths.sparsity_input(), "row_index,col_index\n1;2\n").unwrap();
    let report = run_sparsity(&config, &mut RecordingRenderer::default());
    assert_eq!(
        report.failures().next().map(|e| e.kind()),
        Some(ErrorKind::MalformedData)
    );
}

#[test]
fn two_runs_in_a_row_both_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let config = scratch_config(dir.path());
    write_pattern_csv(&config, &laplacian_pattern(4));

    let mut renderer = RecordingRenderer::default();
    assert!(!run_sparsity(&config, &mut renderer).has_failures());
    assert!(!run_sparsity(&config, &mut renderer).has_failures());
    assert_eq!(renderer.sparsity.len(), 2);
}
