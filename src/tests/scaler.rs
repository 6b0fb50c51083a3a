#[cfg(test)]
mod scaler_tests {
    use itertools::Itertools;

    use crate::{
        colormap::{
            ColorMap, ListedColorMap, ReferenceColorMap, ScaleParams, make_cmap, scale_colormap,
            scaled::SAMPLE_COUNT,
        },
        error::TernplotError,
        tests::utils::*,
        utils::{
            num::{linspace, power_warp},
            pixel::RGB,
        },
    };

    /// Reference samples at linearly spaced positions, no warp, no lightening.
    fn plain_samples(base: &str) -> Vec<RGB> {
        ReferenceColorMap::from_name(base)
            .unwrap()
            .sample(&linspace(0.0, 1.0, SAMPLE_COUNT))
    }

    fn invalid_param(result: crate::error::Result<ListedColorMap>) -> &'static str {
        match result {
            Err(TernplotError::InvalidParameter { param, .. }) => param,
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let params = ScaleParams::default();
        assert_eq!(params, ScaleParams::new(1.5, 0.9, 0.1));
        assert_eq!(params.boundary(SAMPLE_COUNT), 270);

        let cmap = make_cmap(ReferenceColorMap::DEFAULT_NAME, params).unwrap();
        assert_eq!(cmap.name(), "viridis_r_scaled");
        assert_eq!(cmap.len(), SAMPLE_COUNT);
    }

    #[test]
    fn test_always_300_normalized_entries() {
        let mut rng = rand::rng();
        for base in TEST_BASES {
            for _ in 0..8 {
                let params = rand_params(&mut rng);
                let cmap = make_cmap(base, params).unwrap();
                assert_eq!(cmap.len(), SAMPLE_COUNT);
                assert_eq!(cmap.name(), format!("{}_scaled", base));
                assert!(
                    cmap.colors().iter().all(RGB::is_normalized),
                    "{} with {:?} left [0, 1]",
                    base,
                    params
                );
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let params = ScaleParams::new(2.5, 0.4, 0.3);
        assert_eq!(
            make_cmap("plasma", params).unwrap(),
            make_cmap("plasma", params).unwrap()
        );
    }

    #[test]
    fn test_identity_params_reproduce_reference() {
        for base in TEST_BASES {
            let cmap = make_cmap(base, ScaleParams::new(1.0, 0.0, 0.5)).unwrap();
            assert_eq!(cmap.colors(), plain_samples(base).as_slice());
        }
    }

    #[test]
    fn test_zero_adjust_leaves_colors() {
        let lightened = make_cmap("magma", ScaleParams::new(1.7, 0.9, 0.0)).unwrap();
        let untouched = make_cmap("magma", ScaleParams::new(1.7, 0.0, 0.0)).unwrap();
        assert_eq!(lightened, untouched);
    }

    #[test]
    fn test_full_adjust_whitens_lower_segment() {
        let params = ScaleParams::new(1.0, 0.5, 1.0);
        let cmap = make_cmap("viridis", params).unwrap();
        let plain = plain_samples("viridis");
        let boundary = params.boundary(SAMPLE_COUNT);
        assert_eq!(boundary, 150);

        for color in &cmap.colors()[..boundary] {
            assert_eq!((color.r, color.g, color.b), (1.0, 1.0, 1.0));
            assert_eq!(color.a, 1.0);
        }
        assert_eq!(&cmap.colors()[boundary..], &plain[boundary..]);
    }

    #[test]
    fn test_lightening_moves_toward_white() {
        let params = ScaleParams::new(1.0, 1.0, 0.25);
        let cmap = make_cmap("cividis", params).unwrap();
        for (scaled, plain) in cmap.colors().iter().zip(plain_samples("cividis")) {
            let expected = plain.r + (1.0 - plain.r) * 0.25;
            assert!((scaled.r - expected).abs() < 1e-12);
            assert!(scaled.g >= plain.g && scaled.b >= plain.b);
            assert_eq!(scaled.a, plain.a);
        }
    }

    #[test]
    fn test_cutoff_boundary_is_floor() {
        let params = ScaleParams::new(1.0, 0.333, 1.0);
        // 300 * 0.333 = 99.9
        assert_eq!(params.boundary(SAMPLE_COUNT), 99);
        let cmap = make_cmap("greys", params).unwrap();
        assert_eq!(cmap.colors()[98], RGB::new(1.0, 1.0, 1.0, 1.0));
        assert_ne!(cmap.colors()[99], RGB::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_warp_is_monotonic_and_keeps_ends() {
        for exponent in [0.3, 1.0, 1.5, 4.0] {
            let warped = power_warp(&linspace(0.0, 1.0, SAMPLE_COUNT), exponent);
            assert_eq!(warped[0], 0.0);
            assert_eq!(warped[SAMPLE_COUNT - 1], 1.0);
            assert!(warped.iter().tuple_windows().all(|(a, b)| a <= b));
        }
    }

    #[test]
    fn test_warp_favors_low_end_of_reference() {
        // scale_factor > 1 pulls samples toward 0, so the warped map reaches
        // the upper colors of the reference later
        let linear = make_cmap("greys", ScaleParams::new(1.0, 0.0, 0.0)).unwrap();
        let warped = make_cmap("greys", ScaleParams::new(3.0, 0.0, 0.0)).unwrap();
        let mid = SAMPLE_COUNT / 2;
        assert_ne!(linear.colors()[mid], warped.colors()[mid]);
        assert_eq!(linear.colors()[0], warped.colors()[0]);
        assert_eq!(
            linear.colors()[SAMPLE_COUNT - 1],
            warped.colors()[SAMPLE_COUNT - 1]
        );
    }

    #[test]
    fn test_everything_white() {
        let cmap = make_cmap("viridis_r", ScaleParams::new(2.0, 1.0, 1.0)).unwrap();
        assert!(cmap.colors().iter().all(|c| *c == RGB::new(1.0, 1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        for scale_factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let params = ScaleParams::new(scale_factor, 0.9, 0.1);
            assert_eq!(invalid_param(make_cmap("viridis", params)), "scale_factor");
        }
        for cutoff in [-0.01, 1.01, f64::NAN] {
            let params = ScaleParams::new(1.5, cutoff, 0.1);
            assert_eq!(invalid_param(make_cmap("viridis", params)), "cutoff");
        }
        for adjust_factor in [-0.5, 2.0, f64::NAN] {
            let params = ScaleParams::new(1.5, 0.9, adjust_factor);
            assert_eq!(invalid_param(make_cmap("viridis", params)), "adjust_factor");
        }
    }

    #[test]
    fn test_unknown_base_rejected() {
        match make_cmap("not_a_colormap", ScaleParams::default()) {
            Err(TernplotError::UnknownColorMap(name)) => assert_eq!(name, "not_a_colormap"),
            other => panic!("expected UnknownColorMap, got {:?}", other),
        }
    }

    #[test]
    fn test_base_name_is_honored() {
        let params = ScaleParams::default();
        let viridis = make_cmap("viridis", params).unwrap();
        let reversed = make_cmap("viridis_r", params).unwrap();
        let magma = make_cmap("magma", params).unwrap();
        assert_ne!(viridis.colors(), reversed.colors());
        assert_ne!(viridis.colors(), magma.colors());
    }

    #[test]
    fn test_scale_existing_colormap() {
        let two_tone = ListedColorMap::new("two_tone", vec![RGB::BLACK, RGB::WHITE]);
        let cmap = scale_colormap(&two_tone, &ScaleParams::new(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(cmap.name(), "two_tone_scaled");
        assert_eq!(cmap.len(), SAMPLE_COUNT);
        assert_eq!(cmap.colors()[0], RGB::BLACK);
        assert_eq!(cmap.colors()[SAMPLE_COUNT - 1], RGB::WHITE);

        let boxed: Box<dyn ColorMap> = Box::new(ReferenceColorMap::from_name("inferno").unwrap());
        let scaled = scale_colormap(boxed.as_ref(), &ScaleParams::default()).unwrap();
        assert_eq!(scaled, make_cmap("inferno", ScaleParams::default()).unwrap());
    }
}
