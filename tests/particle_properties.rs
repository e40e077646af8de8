//! 粒子场属性测试

use express_fx::config::FxConfig;
use express_fx::core::scheduler::ManualScheduler;
use express_fx::platform::{DeviceClass, Environment};
use express_fx::render::particles::{Ember, FieldSurfaces, ParticleField, SeededRandom, Spark};
use express_fx::render::surface::{RecordingSurface, Viewport};
use glam::Vec2;
use proptest::prelude::*;

type TestField = ParticleField<RecordingSurface, SeededRandom>;

fn environment() -> Environment {
    Environment::new(
        Viewport::new(1280.0, 720.0, 1.0, 2.0),
        DeviceClass::Desktop,
        false,
    )
}

fn started_field(config: &FxConfig, seed: u64) -> (TestField, ManualScheduler) {
    let mut scheduler = ManualScheduler::new();
    let mut field = ParticleField::new(
        config,
        environment(),
        FieldSurfaces::both(RecordingSurface::new(), RecordingSurface::new()),
        SeededRandom::from_seed(seed),
    );
    assert!(field.start(&mut scheduler));
    (field, scheduler)
}

fn quiet_config() -> FxConfig {
    let mut config = FxConfig::default();
    config.particles.sparks.spawn_chance = 0.0;
    config
}

fn spark_strategy() -> impl Strategy<Value = Spark> {
    (
        0.0f32..200.0,
        0.0f32..300.0,
        3.5f32..8.5,
        -1.2f32..0.9,
        1u32..60,
        0.5f32..0.95,
    )
        .prop_map(|(x, y, vx, vy, life, alpha)| Spark {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            life,
            size: 1.5,
            hue: 220.0,
            alpha,
        })
}

proptest! {
    #[test]
    fn spark_lifetimes_drop_by_one(sparks in prop::collection::vec(spark_strategy(), 1..32)) {
        let (mut field, mut scheduler) = started_field(&quiet_config(), 5);
        for spark in &sparks {
            field.insert_spark(*spark);
        }
        field.tick(16.0, &mut scheduler);

        let mut expected: Vec<u32> = sparks
            .iter()
            .filter(|s| s.life > 1)
            .map(|s| s.life - 1)
            .collect();
        let mut actual: Vec<u32> = field.sparks().iter().map(|s| s.life).collect();
        expected.sort_unstable();
        actual.sort_unstable();
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn forced_spawn_yields_one_to_three(seed in any::<u64>()) {
        let mut config = FxConfig::default();
        config.particles.sparks.spawn_chance = 1.0;
        config.particles.sparks.per_tick_desktop = 3;
        let (mut field, mut scheduler) = started_field(&config, seed);

        prop_assert!(field.sparks().is_empty());
        field.tick(0.0, &mut scheduler);
        let count = field.sparks().len();
        prop_assert!((1..=3).contains(&count));
    }

    #[test]
    fn ember_alpha_stays_in_clamp(
        now_ms in 0.0f64..1.0e7,
        alpha in 0.0f32..1.0,
        twinkle in 0.004f32..0.014,
    ) {
        let config = FxConfig::default();
        let ember = Ember {
            position: Vec2::new(100.0, 100.0),
            velocity: Vec2::ZERO,
            life: 100,
            size: 1.0,
            hue: 45.0,
            alpha,
            twinkle,
        };
        let rendered = ember.render_alpha(now_ms, &config.particles.embers);
        prop_assert!((0.05..=0.42).contains(&rendered));
    }
}

#[test]
fn ember_population_is_steady() {
    let (mut field, mut scheduler) = started_field(&FxConfig::default(), 17);
    let target = field.ember_target();
    assert_eq!(field.embers().len(), target);

    for frame in 0..2000u32 {
        assert!(scheduler.take_pending());
        if frame % 50 == 0 {
            let x = (frame % 1280) as f32;
            field.pointer_moved(Vec2::new(x, 360.0));
        }
        field.tick(f64::from(frame) * 16.7, &mut scheduler);
        assert_eq!(field.embers().len(), target);
    }
    // 寿命最长 379 tick，2000 tick 内所有余烬都至少替换过一次
    assert!(field.stats().embers_respawned >= target as u64);
}

#[test]
fn rendered_ember_alpha_in_range() {
    let (mut field, mut scheduler) = started_field(&FxConfig::default(), 23);
    for frame in 0..300u32 {
        scheduler.take_pending();
        field.tick(f64::from(frame) * 16.7, &mut scheduler);
        let surface = field.ember_surface().unwrap();
        for (_, _, color) in surface.circles() {
            assert!((0.05..=0.42).contains(&color.alpha), "alpha {}", color.alpha);
        }
    }
}

#[test]
fn spark_rendered_alpha_never_increases() {
    let (mut field, mut scheduler) = started_field(&quiet_config(), 29);
    field.insert_spark(Spark {
        position: Vec2::new(0.0, 400.0),
        velocity: Vec2::new(4.0, -1.0),
        life: 49,
        size: 2.0,
        hue: 280.0,
        alpha: 0.95,
    });

    let mut last = f32::INFINITY;
    let mut frames = 0;
    while !field.sparks().is_empty() {
        scheduler.take_pending();
        field.tick(f64::from(frames) * 16.7, &mut scheduler);
        let (_, _, color) = field.spark_surface().unwrap().circles().next().unwrap();
        assert!(color.alpha <= last);
        last = color.alpha;
        frames += 1;
    }
    assert_eq!(frames, 49);
}

#[test]
fn spark_just_past_right_margin_is_removed() {
    let (mut field, mut scheduler) = started_field(&quiet_config(), 31);
    let width = field.viewport().width;
    field.insert_spark(Spark {
        position: Vec2::new(width + 81.0, 200.0),
        velocity: Vec2::new(5.0, 0.0),
        life: 50,
        size: 2.0,
        hue: 200.0,
        alpha: 0.8,
    });
    field.tick(16.0, &mut scheduler);
    assert!(field.sparks().is_empty());
}

#[test]
fn ember_above_top_margin_is_replaced() {
    let (mut field, mut scheduler) = started_field(&FxConfig::default(), 37);
    field.insert_ember(Ember {
        position: Vec2::new(640.0, -61.0),
        velocity: Vec2::new(0.0, -0.2),
        life: 300,
        size: 1.0,
        hue: 50.0,
        alpha: 0.2,
        twinkle: 0.01,
    });
    let count = field.embers().len();
    field.tick(16.0, &mut scheduler);

    assert_eq!(field.embers().len(), count);
    let fresh = field.embers()[count - 1];
    assert!(fresh.position.y > -60.0);
    assert!((180..380).contains(&fresh.life));
}

#[test]
fn ember_on_last_tick_is_replaced() {
    let (mut field, mut scheduler) = started_field(&quiet_config(), 43);
    field.insert_ember(Ember {
        position: Vec2::new(640.0, 400.0),
        velocity: Vec2::new(0.0, -0.2),
        life: 1,
        size: 1.0,
        hue: 50.0,
        alpha: 0.2,
        twinkle: 0.01,
    });
    let count = field.embers().len();
    let replaced_before = field.stats().embers_respawned;
    field.tick(16.0, &mut scheduler);

    assert_eq!(field.embers().len(), count);
    assert_eq!(field.stats().embers_respawned, replaced_before + 1);
    let fresh = field.embers()[count - 1];
    assert!((180..380).contains(&fresh.life));
    assert!(field.embers().iter().all(|ember| ember.life > 0));
}

#[test]
fn reduced_motion_keeps_field_dormant() {
    let mut scheduler = ManualScheduler::new();
    let mut field: TestField = ParticleField::new(
        &FxConfig::default(),
        environment().with_reduced_motion(true),
        FieldSurfaces::both(RecordingSurface::new(), RecordingSurface::new()),
        SeededRandom::from_seed(41),
    );
    assert!(!field.start(&mut scheduler));
    for frame in 0..10 {
        field.tick(f64::from(frame) * 16.0, &mut scheduler);
    }
    assert_eq!(scheduler.requested(), 0);
    assert!(field.sparks().is_empty());
    assert!(field.embers().is_empty());
}
