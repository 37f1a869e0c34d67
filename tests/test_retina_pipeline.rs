// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Configuration-to-Retina Pipeline Tests

Covers the path the demo driver takes:
- TOML file -> validated config -> RetinaParameters
- Build, stimulate, step
- Bipolar output tracks the light level
*/

use std::fs;

use proptest::prelude::*;
use retina::config::{load_config, validate_config, RetinaConfig};
use retina::prelude::*;
use tempfile::tempdir;

fn retina_from_toml(toml: &str) -> Retina {
    let dir = tempdir().unwrap();
    let path = dir.path().join("retina_configuration.toml");
    fs::write(&path, toml).unwrap();

    let config = load_config(Some(&path), None).unwrap();
    validate_config(&config).unwrap();
    Retina::new(&retina_parameters(&config)).unwrap()
}

fn uniform_bipolar(photons: i32) -> f64 {
    let mut retina = Retina::new(&retina_parameters(&RetinaConfig::default())).unwrap();
    retina.apply_uniform_stimulus(photons, 550, 0).unwrap();
    retina.step(1).unwrap();
    retina.bipolar_potential(1, 1).unwrap()
}

#[test]
fn test_file_config_shapes_the_retina() {
    let retina = retina_from_toml(
        r#"
        [grid]
        rows = 15
        cols = 10

        [bipolar]
        block_size = 5
        "#,
    );

    assert_eq!(retina.photoreceptors().dimensions(), GridDimensions::new(15, 10));
    assert_eq!(retina.bipolars().dimensions(), GridDimensions::new(3, 2));
    assert_eq!(retina.arena().len(), 150 + 6);
}

#[test]
fn test_invalid_file_config_is_caught_before_building() {
    let mut config = RetinaConfig::default();
    config.bipolar.block_size = 4;
    assert!(validate_config(&config).is_err());
    assert!(Retina::new(&retina_parameters(&config)).is_err());
}

#[test]
fn test_default_run_matches_checkerboard() {
    let mut retina = Retina::new(&retina_parameters(&RetinaConfig::default())).unwrap();
    retina.apply_uniform_stimulus(50, 550, 0).unwrap();
    retina.step(1).unwrap();

    let arena = retina.arena();
    let types = display::type_map(arena, retina.photoreceptors()).unwrap();
    assert!(types.starts_with("RCRCRCRCRC\nCRCRCRCRCR\n"));

    // Every rod sits closer to saturation than every cone
    let rod = retina.photoreceptor_potential(0, 0).unwrap();
    let cone = retina.photoreceptor_potential(0, 1).unwrap();
    assert!(rod < cone);
    for v in retina.bipolar_potentials().unwrap().iter() {
        assert!(*v < cone && *v > rod);
    }
}

#[test]
fn test_darkness_keeps_bipolars_at_rest() {
    assert_eq!(uniform_bipolar(0), -40.0);
}

proptest! {
    #[test]
    fn bipolar_hyperpolarizes_with_more_light(a in 0i32..5000, b in 0i32..5000) {
        let (dim, bright) = if a <= b { (a, b) } else { (b, a) };
        let v_dim = uniform_bipolar(dim);
        let v_bright = uniform_bipolar(bright);

        prop_assert!(v_bright <= v_dim);
        prop_assert!(v_bright > -70.0 && v_dim <= -40.0);
    }
}
