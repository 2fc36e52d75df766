#![allow(clippy::float_cmp)]

use iqm_core::{IlpModel, IntegerModel, VarKind};
use iqm_exact::ExactSampler;
use iqm_sampler::SamplerConfig;

/// Test: minimize (x - 2)^2 + (y + 3)^2 over x uint3, y int4.
///
/// Built as x^2 - 4x + y^2 + 6y + 13, so the optimum has energy exactly 0.
#[test]
fn test_quadratic_scenario_finds_integer_optimum() {
    let mut model = IntegerModel::new();
    model
        .add_variable("x", VarKind::Uint { precision: 3 })
        .unwrap();
    model
        .add_variable("y", VarKind::Int { precision: 4 })
        .unwrap();
    model.add_linear("x", -4.0).unwrap();
    model.add_linear("y", 6.0).unwrap();
    model.add_interaction("x", "x", 1.0).unwrap();
    model.add_interaction("y", "y", 1.0).unwrap();
    model.add_offset(13.0);

    model.set_sampler(Box::new(ExactSampler::new()));
    let set = model.sample(&SamplerConfig::new()).unwrap();

    // 3 + 4 binary variables, exhaustively enumerated
    assert_eq!(set.len(), 128);

    let best = &set.records()[0];
    assert_eq!(best.energy, 0.0);
    assert_eq!(set.value(best, &"x".to_string()), Some(2));
    assert_eq!(set.value(best, &"y".to_string()), Some(-3));
    assert_eq!(best.num_occurrences, 1);

    // the optimum is unique; the next assignments sit one unit away
    assert_eq!(set.records()[1].energy, 1.0);
}

/// Every representable unsigned value survives the encode/sample/decode trip.
#[test]
fn test_uint_roundtrip_through_pipeline() {
    let precision = 3;
    for target in 0..(1i64 << precision) {
        // minimize (x - target)^2
        let mut model = IntegerModel::new();
        model.add_variable("x", VarKind::Uint { precision }).unwrap();
        model.add_linear("x", -2.0 * target as f64).unwrap();
        model.add_interaction("x", "x", 1.0).unwrap();
        model.add_offset((target * target) as f64);

        let mut sampler = ExactSampler::new();
        let set = model.sample_with(&mut sampler, &SamplerConfig::new()).unwrap();
        let best = &set.records()[0];
        assert_eq!(best.energy, 0.0, "target {}", target);
        assert_eq!(set.value(best, &"x".to_string()), Some(target));
    }
}

/// Every representable signed value survives the encode/sample/decode trip.
#[test]
fn test_int_roundtrip_through_pipeline() {
    let kind = VarKind::Int { precision: 3 };
    for target in kind.min_value()..=kind.max_value() {
        let mut model = IntegerModel::new();
        model.add_variable("y", kind).unwrap();
        model.add_linear("y", -2.0 * target as f64).unwrap();
        model.add_interaction("y", "y", 1.0).unwrap();
        model.add_offset((target * target) as f64);

        let mut sampler = ExactSampler::new();
        let set = model.sample_with(&mut sampler, &SamplerConfig::new()).unwrap();
        let best = &set.records()[0];
        assert_eq!(best.energy, 0.0, "target {}", target);
        assert_eq!(set.value(best, &"y".to_string()), Some(target));
    }
}

/// Offset shifts every reported energy by a constant and nothing else.
#[test]
fn test_offset_is_purely_additive() {
    let build = |offset: f64| {
        let mut model = IntegerModel::new();
        model
            .add_variable("x", VarKind::Uint { precision: 2 })
            .unwrap();
        model.add_linear("x", -1.0).unwrap();
        model.add_offset(offset);
        let mut sampler = ExactSampler::new();
        model
            .sample_with(&mut sampler, &SamplerConfig::new())
            .unwrap()
    };

    let base = build(0.0);
    let shifted = build(5.5);
    assert_eq!(base.len(), shifted.len());
    for (a, b) in base.records().iter().zip(shifted.records()) {
        assert_eq!(a.sample, b.sample);
        assert_eq!(a.energy + 5.5, b.energy);
        assert_eq!(a.num_occurrences, b.num_occurrences);
    }
}

/// Mixed binary and integer variables decode side by side.
#[test]
fn test_mixed_kinds_decode_together() {
    // minimize 2*b + (x - 1)^2: optimum b = 0, x = 1
    let mut model = IntegerModel::new();
    model.add_variable("b", VarKind::Binary).unwrap();
    model
        .add_variable("x", VarKind::Uint { precision: 2 })
        .unwrap();
    model.add_linear("b", 2.0).unwrap();
    model.add_linear("x", -2.0).unwrap();
    model.add_interaction("x", "x", 1.0).unwrap();
    model.add_offset(1.0);

    let mut sampler = ExactSampler::new();
    let set = model.sample_with(&mut sampler, &SamplerConfig::new()).unwrap();

    let best = &set.records()[0];
    assert_eq!(best.energy, 0.0);
    assert_eq!(set.value(best, &"b".to_string()), Some(0));
    assert_eq!(set.value(best, &"x".to_string()), Some(1));
}

/// Test: minimize x0 + 2*x1 subject to 2*x0 + 2*x1 = 4 over uint2 variables.
///
/// The constraint is scaled by 2 so its quadratic penalty dominates the
/// objective; the feasible optimum is x0 = 2, x1 = 0 with objective 2.
#[test]
fn test_ilp_equality_constraint_through_pipeline() {
    let uint2 = VarKind::Uint { precision: 2 };
    let mut ilp = IlpModel::new(
        &[1.0, 2.0],
        &[vec![2.0, 2.0]],
        &[4.0],
        &[uint2, uint2],
    )
    .unwrap();
    ilp.set_sampler(Box::new(ExactSampler::new()));

    let set = ilp.sample(&SamplerConfig::new()).unwrap();
    assert_eq!(set.len(), 16);

    let best = &set.records()[0];
    // zero penalty at the optimum, so the energy is the objective value
    assert_eq!(best.energy, 2.0);
    assert_eq!(set.value(best, &IlpModel::variable_name(0)), Some(2));
    assert_eq!(set.value(best, &IlpModel::variable_name(1)), Some(0));

    // next-best is the other feasible point x0 = 1, x1 = 1
    assert_eq!(set.records()[1].energy, 3.0);
}

/// Sampler failures propagate through the model layer unchanged.
#[test]
fn test_backend_limit_error_surfaces() {
    let mut model = IntegerModel::new();
    model
        .add_variable("x", VarKind::Uint { precision: 8 })
        .unwrap();
    model.set_sampler(Box::new(ExactSampler::with_limit(4)));

    let err = model.sample(&SamplerConfig::new()).unwrap_err();
    assert_eq!(err.code(), "SAMPLER_TOO_MANY_VARIABLES");
}
