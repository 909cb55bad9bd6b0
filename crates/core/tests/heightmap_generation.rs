//! End-to-end generation tests
//!
//! Determinism across runs, output dimensions of every strategy, and the
//! noise-free reference scenarios.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use terrain_gen_core::generator::{DEFAULT_SEED, MID_HEIGHT};
use terrain_gen_core::{
    generate_terrain, Grid, HeightStats, HeightmapGenerator, Strategy, TerrainConfig,
};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn strategies() -> Vec<Strategy> {
    vec![
        Strategy::Subdivision {
            size: 65,
            strength: 20.0,
        },
        Strategy::Doubling {
            seed_size: 3,
            seed_low: 14000,
            seed_span: 12000,
            doublings: 5,
            strength: 3500.0,
            decay: 0.5,
        },
        Strategy::FloodGrowth {
            size: 48,
            strength: 20.0,
        },
    ]
}

#[test]
fn test_same_seed_gives_identical_bytes() {
    for strategy in strategies() {
        let config = TerrainConfig {
            seed: 1234,
            strategy,
        };
        let first = generate_terrain(&config).unwrap();
        let second = generate_terrain(&config).unwrap();

        assert_eq!(
            first.as_bytes(),
            second.as_bytes(),
            "{} is not deterministic",
            config.strategy.name()
        );
    }
}

#[test]
fn test_different_seeds_differ() {
    for strategy in strategies() {
        let a = generate_terrain(&TerrainConfig {
            seed: 1,
            strategy: strategy.clone(),
        })
        .unwrap();
        let b = generate_terrain(&TerrainConfig { seed: 2, strategy }).unwrap();

        assert_ne!(a.as_slice(), b.as_slice());
    }
}

#[test]
fn test_output_dimensions_match_prediction() {
    for strategy in strategies() {
        let config = TerrainConfig { seed: 8, strategy };
        let map = generate_terrain(&config).unwrap();

        assert_eq!(
            config.output_dimensions(),
            Some((map.width(), map.height()))
        );
        assert_eq!(map.size(), map.width() * map.height());
    }
}

#[test]
fn test_three_by_three_without_noise_then_doubled() {
    let mut generator = HeightmapGenerator::new(0);
    let mut base = Grid::new(3, 3);
    generator.subdivide(&mut base, 0.0);
    assert!(base.as_slice().iter().all(|&h| h == MID_HEIGHT));

    let doubled = generator.double(&base, 0.0);
    assert_eq!((doubled.width(), doubled.height()), (5, 5));
    for corner in [(0, 0), (4, 0), (0, 4), (4, 4)] {
        assert_eq!(doubled[doubled.at(corner.0, corner.1)], MID_HEIGHT);
    }
    assert!(doubled.as_slice().iter().all(|&h| h == MID_HEIGHT));
}

#[test]
fn test_doubling_chain_sizes() {
    let mut generator = HeightmapGenerator::new(77);
    let mut map = generator.seed_map(3, 14000, 12000);
    for expected in [5, 9, 17, 33] {
        map = generator.double(&map, 100.0);
        assert_eq!((map.width(), map.height()), (expected, expected));
    }
}

#[test]
fn test_doubling_preserves_coarse_samples_without_noise() {
    let mut generator = HeightmapGenerator::new(31);
    let src = generator.seed_map(9, 20000, 10000);
    let out = generator.double(&src, 0.0);

    for y in 0..9 {
        for x in 0..9 {
            assert_eq!(out[out.at(2 * x, 2 * y)], src[src.at(x, y)]);
        }
    }
}

#[test]
fn test_reference_terrain_has_relief() {
    let map = generate_terrain(&TerrainConfig::default()).unwrap();
    let stats = HeightStats::from_grid(&map);

    assert_eq!((map.width(), map.height()), (1025, 1025));
    assert!(stats.range() > 1000, "range {}", stats.range());
    assert!(stats.std_dev > 0.0);
}

#[test]
fn test_coarsest_level_follows_seeded_normal_stream() {
    let mut map = Grid::new(3, 3);
    HeightmapGenerator::new(DEFAULT_SEED).subdivide(&mut map, 2000.0);

    let mut reference = ChaCha8Rng::seed_from_u64(DEFAULT_SEED);
    for &height in map.as_slice() {
        let noise: f64 = reference.sample(StandardNormal);
        let expected = (f64::from(MID_HEIGHT) + noise * 2000.0).clamp(0.0, 65535.0) as u16;
        assert_eq!(height, expected);
    }
}

#[test]
fn test_seed_map_follows_seeded_uniform_stream() {
    let map = HeightmapGenerator::new(DEFAULT_SEED).seed_map(3, 14000, 12000);

    let mut reference = ChaCha8Rng::seed_from_u64(DEFAULT_SEED);
    for &height in map.as_slice() {
        assert_eq!(height, reference.random_range(14000u16..=26000));
    }
}
