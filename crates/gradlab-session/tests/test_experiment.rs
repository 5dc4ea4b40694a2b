//! End-to-end tests for the host-facing experiment entry point

use approx::assert_abs_diff_eq;
use gradlab_numerical::TerrainError;
use gradlab_session::{run_experiment, ExperimentError, ExperimentInput};
use gradlab_types::{EvalError, ParameterError};

fn input(expression: &str, learning_rate: f64, iterations: usize, x0: f64) -> ExperimentInput {
    ExperimentInput {
        expression: expression.to_string(),
        learning_rate,
        iterations,
        initial_position: x0,
        ..ExperimentInput::default()
    }
}

#[test]
fn test_default_experiment() {
    let report = run_experiment(&ExperimentInput::default()).unwrap();

    assert_eq!(report.trajectory.len(), 31);
    assert_eq!(report.terrain.len(), 200);
    assert_abs_diff_eq!(report.diagnostics.final_position, 1.0, epsilon = 1e-2);
    assert!(report.diagnostics.converged);
    assert_eq!(report.summary(), "Converged to a minimum (flat)");
}

#[test]
fn test_report_matches_last_trajectory_point() {
    let report = run_experiment(&input("x^2", 0.1, 1, 2.0)).unwrap();
    let last = report.trajectory.last();

    assert_eq!(report.diagnostics.final_position, last.position);
    assert_eq!(report.diagnostics.final_value, last.value);
    assert!(!report.diagnostics.converged);
    assert_eq!(report.summary(), "Still descending or oscillating");
}

#[test]
fn test_rerun_is_identical() {
    let request = input("sin(3*x) + x^2/4", 0.2, 40, -1.5);
    assert_eq!(run_experiment(&request), run_experiment(&request));
}

#[test]
fn test_invalid_parameters_rejected_before_compiling() {
    let err = run_experiment(&input("not valid (", 0.0, 10, 1.0)).unwrap_err();
    assert!(matches!(err, ExperimentError::Parameters(_)));

    let err = run_experiment(&input("x^2", 0.1, 0, 1.0)).unwrap_err();
    assert!(matches!(err, ExperimentError::Parameters(_)));
}

#[test]
fn test_compile_error_message_surfaces() {
    let err = run_experiment(&input("x + y", 0.1, 10, 1.0)).unwrap_err();
    assert!(matches!(err, ExperimentError::Compile(_)));
    assert_eq!(err.to_string(), "error in function: name 'y' is not defined");
    assert!(err.partial_trajectory().is_none());
}

#[test]
fn test_smoke_test_runs_at_initial_position() {
    // 1/x is fine from x0 = 2 and moves away from the pole
    let report = run_experiment(&input("1/x", 0.1, 10, 2.0)).unwrap();
    assert!(report.trajectory.last().position > 2.0);

    let err = run_experiment(&input("1/x", 0.1, 10, 0.0)).unwrap_err();
    assert_eq!(err.to_string(), "error in function: division by zero");
}

#[test]
fn test_divergence_reports_partial_trajectory() {
    let err = run_experiment(&input("exp(x^2)", 1.5, 10, 2.0)).unwrap_err();
    let partial = err.partial_trajectory().unwrap();
    assert_eq!(partial.len(), 1);
    assert_eq!(partial[0].position, 2.0);
}

#[test]
fn test_terrain_failure_aborts_run() {
    // the descent stays positive but the window reaches x <= 0
    let err = run_experiment(&input("x - ln(x)", 0.1, 10, 2.0)).unwrap_err();
    match &err {
        ExperimentError::Terrain {
            source: TerrainError::Evaluation(EvalError::Domain { .. }),
            trajectory,
            diagnostics,
        } => {
            assert_eq!(trajectory.len(), 11);
            assert_eq!(diagnostics.final_position, trajectory.last().position);
        }
        other => panic!("Expected terrain failure, got {:?}", other),
    }

    let partial = err.partial_trajectory().unwrap();
    assert_eq!(partial.len(), 11);
    assert_eq!(partial[0].position, 2.0);
    assert!(partial.iter().all(|p| p.position > 0.0));
}

#[test]
fn test_diagnostics_failure_keeps_trajectory() {
    // one step lands exactly on x = 1, where sqrt(1 - x) has no room for x + h
    let err = run_experiment(&input("0*sqrt(1 - x) - x", 1.0, 1, 0.0)).unwrap_err();
    match &err {
        ExperimentError::Diagnostics {
            source: EvalError::Domain { .. },
            trajectory,
        } => {
            assert_eq!(trajectory.len(), 2);
            assert_eq!(trajectory.last().position, 1.0);
            assert_eq!(trajectory.last().value, -1.0);
        }
        other => panic!("Expected diagnostics failure, got {:?}", other),
    }
    assert_eq!(err.partial_trajectory().map(|p| p.len()), Some(2));
}

#[test]
fn test_terrain_sample_count_validated_first() {
    for n in [0, 1, usize::MAX / 16] {
        let request = ExperimentInput {
            terrain_samples: n,
            ..ExperimentInput::default()
        };
        let err = run_experiment(&request).unwrap_err();
        assert!(
            matches!(
                err,
                ExperimentError::Parameters(ParameterError::TerrainSamples { got, .. }) if got == n
            ),
            "unexpected result for {} samples: {:?}",
            n,
            err
        );
        assert!(err.partial_trajectory().is_none());
    }

    let request = ExperimentInput {
        terrain_samples: 2,
        ..ExperimentInput::default()
    };
    assert_eq!(run_experiment(&request).unwrap().terrain.len(), 2);
}

#[test]
fn test_input_deserializes_with_defaults() {
    let parsed: ExperimentInput =
        serde_json::from_str(r#"{ "expression": "x^2", "iterations": 5 }"#).unwrap();
    assert_eq!(parsed.expression, "x^2");
    assert_eq!(parsed.iterations, 5);
    assert_eq!(parsed.learning_rate, ExperimentInput::default().learning_rate);
}

#[test]
fn test_report_serializes() {
    let report = run_experiment(&input("x^2", 0.1, 2, 1.0)).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["trajectory"]["points"].as_array().unwrap().len(), 3);
    assert_eq!(json["parameters"]["iterations"], 2);
    assert!(json["diagnostics"]["converged"].is_boolean());
}
