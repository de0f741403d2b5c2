use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DECOR_COUNT, EGG_EDGE_INSET, MIN_EGG_DISTANCE, PAGE_HEIGHT, PLACEMENT_ATTEMPTS,
};
use crate::prize::Prize;

/// Decorative icon categories scattered over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorKind {
    Leaf,
    Plant,
    Mountain,
    Water,
    Cloud,
    Circle,
    Star,
}

/// What a scene element is: scenery, or a clickable egg wrapping exactly
/// one prize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementKind {
    Decor(DecorKind),
    Egg(Prize),
}

/// Parameters of the looping idle motion every element runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub duration_secs: f64,
    pub delay_secs: f64,
    pub move_range: f64,
    pub rotate_range: f64,
}

/// Where and how an element sits on the virtual canvas, in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
    pub rotation: f64,
    pub scale: f64,
    pub opacity: f64,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneElement {
    pub id: String,
    pub kind: ElementKind,
    pub placement: Placement,
    pub motion: Motion,
}

impl SceneElement {
    pub fn is_egg(&self) -> bool {
        matches!(self.kind, ElementKind::Egg(_))
    }

    pub fn prize(&self) -> Option<&Prize> {
        match &self.kind {
            ElementKind::Egg(prize) => Some(prize),
            ElementKind::Decor(_) => None,
        }
    }
}

/// Knobs for one scene generation. `Default` carries the production
/// values; only the viewport width varies per visitor.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub page_height: f64,
    pub viewport_width: f64,
    pub decor_count: usize,
    pub egg_inset: f64,
    pub min_egg_distance: f64,
    pub placement_attempts: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            page_height: PAGE_HEIGHT,
            viewport_width: 1280.0,
            decor_count: DECOR_COUNT,
            egg_inset: EGG_EDGE_INSET,
            min_egg_distance: MIN_EGG_DISTANCE,
            placement_attempts: PLACEMENT_ATTEMPTS,
        }
    }
}

impl SceneConfig {
    pub fn for_viewport(viewport_width: f64) -> Self {
        Self {
            viewport_width,
            ..Self::default()
        }
    }
}

/// Generates the full element field for one session: `decor_count`
/// decoratives plus one egg per prize, shuffled into a single paint order.
///
/// Pure given the injected random source, so seeded generations are
/// reproducible. Runs once per page load; resize and scroll never
/// re-trigger it.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    config: &SceneConfig,
    prizes: &[Prize],
) -> Vec<SceneElement> {
    let mut elements = Vec::with_capacity(config.decor_count + prizes.len());

    for i in 0..config.decor_count {
        elements.push(SceneElement {
            id: format!("decor-{}", i),
            kind: ElementKind::Decor(sample_decor_kind(rng)),
            placement: Placement {
                top: rng.gen_range(0.0..config.page_height),
                left: rng.gen_range(0.0..config.viewport_width),
                rotation: rng.gen_range(0.0..360.0),
                scale: rng.gen_range(0.2..2.7),
                opacity: rng.gen_range(0.8..1.0),
                size: rng.gen_range(5.0..65.0),
            },
            motion: sample_motion(rng),
        });
    }

    let mut egg_positions: Vec<(f64, f64)> = Vec::with_capacity(prizes.len());
    for (i, prize) in prizes.iter().enumerate() {
        let (top, left) = place_egg(rng, config, &egg_positions);
        egg_positions.push((top, left));

        let id = prize
            .code
            .clone()
            .unwrap_or_else(|| format!("spoiled-{}", i));
        elements.push(SceneElement {
            id,
            kind: ElementKind::Egg(prize.clone()),
            placement: Placement {
                top,
                left,
                rotation: rng.gen_range(0.0..360.0),
                scale: rng.gen_range(0.2..2.7),
                opacity: 1.0,
                size: rng.gen_range(5.0..65.0),
            },
            motion: sample_motion(rng),
        });
    }

    elements.shuffle(rng);
    elements
}

fn sample_motion<R: Rng + ?Sized>(rng: &mut R) -> Motion {
    Motion {
        duration_secs: rng.gen_range(3.0..10.0),
        delay_secs: rng.gen_range(-5.0..0.0),
        move_range: rng.gen_range(20.0..60.0),
        rotate_range: rng.gen_range(10.0..30.0),
    }
}

// One uniform draw against the fixed probability bands.
fn sample_decor_kind<R: Rng + ?Sized>(rng: &mut R) -> DecorKind {
    let roll: f64 = rng.gen();
    if roll > 0.7 {
        DecorKind::Leaf
    } else if roll > 0.6 {
        DecorKind::Plant
    } else if roll > 0.5 {
        DecorKind::Mountain
    } else if roll > 0.4 {
        DecorKind::Water
    } else if roll > 0.3 {
        DecorKind::Cloud
    } else if roll > 0.2 {
        DecorKind::Circle
    } else {
        DecorKind::Star
    }
}

/// Rejection sampling with a cap: resample while the candidate crowds an
/// already-placed egg, then accept whatever the last draw was. Placement
/// must never fail outright, so a too-close egg after the retry budget is
/// tolerated.
fn place_egg<R: Rng + ?Sized>(
    rng: &mut R,
    config: &SceneConfig,
    placed: &[(f64, f64)],
) -> (f64, f64) {
    let mut top = rng.gen_range(0.0..config.page_height);
    let mut left = sample_egg_left(rng, config);

    for _ in 0..config.placement_attempts {
        if clear_of_others(top, left, placed, config.min_egg_distance) {
            break;
        }
        top = rng.gen_range(0.0..config.page_height);
        left = sample_egg_left(rng, config);
    }

    (top, left)
}

fn sample_egg_left<R: Rng + ?Sized>(rng: &mut R, config: &SceneConfig) -> f64 {
    // Inset from both edges when the viewport is wide enough for it.
    if config.viewport_width > 2.0 * config.egg_inset {
        rng.gen_range(config.egg_inset..config.viewport_width - config.egg_inset)
    } else {
        rng.gen_range(0.0..config.viewport_width)
    }
}

fn clear_of_others(top: f64, left: f64, placed: &[(f64, f64)], min_distance: f64) -> bool {
    placed
        .iter()
        .all(|&(t, l)| ((top - t).powi(2) + (left - l).powi(2)).sqrt() >= min_distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SPOILED_EGG_COUNT;
    use crate::prize::{spoiled_pool, DISCOUNTS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn full_pool(rng: &mut StdRng) -> Vec<Prize> {
        let mut prizes = DISCOUNTS.clone();
        prizes.extend(spoiled_pool(rng, SPOILED_EGG_COUNT));
        prizes
    }

    fn generate_seeded(seed: u64) -> Vec<SceneElement> {
        let mut rng = StdRng::seed_from_u64(seed);
        let prizes = full_pool(&mut rng);
        generate(&mut rng, &SceneConfig::default(), &prizes)
    }

    #[test]
    fn test_element_counts() {
        let scene = generate_seeded(1);
        let eggs = scene.iter().filter(|e| e.is_egg()).count();
        assert_eq!(eggs, DISCOUNTS.len() + SPOILED_EGG_COUNT);
        assert_eq!(scene.len(), DECOR_COUNT + eggs);
    }

    #[test]
    fn test_every_discount_appears_exactly_once() {
        let scene = generate_seeded(2);
        let mut egg_codes: Vec<String> = scene
            .iter()
            .filter_map(|e| e.prize())
            .filter_map(|p| p.code.clone())
            .collect();
        egg_codes.sort();

        let mut catalog: Vec<String> = DISCOUNTS.iter().filter_map(|p| p.code.clone()).collect();
        catalog.sort();

        assert_eq!(egg_codes, catalog);
    }

    #[test]
    fn test_element_ids_are_distinct() {
        let scene = generate_seeded(3);
        let ids: HashSet<_> = scene.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids.len(), scene.len());
    }

    #[test]
    fn test_eggs_keep_minimum_spacing_in_nearly_all_runs() {
        // Spacing is best effort, so assert over repeated generations
        // instead of demanding it universally.
        let mut total_pairs = 0usize;
        let mut crowded_pairs = 0usize;

        for seed in 0..20 {
            let scene = generate_seeded(seed);
            let eggs: Vec<&Placement> = scene
                .iter()
                .filter(|e| e.is_egg())
                .map(|e| &e.placement)
                .collect();

            for i in 0..eggs.len() {
                for j in (i + 1)..eggs.len() {
                    total_pairs += 1;
                    let d = ((eggs[i].top - eggs[j].top).powi(2)
                        + (eggs[i].left - eggs[j].left).powi(2))
                    .sqrt();
                    if d < MIN_EGG_DISTANCE {
                        crowded_pairs += 1;
                    }
                }
            }
        }

        assert!(
            (crowded_pairs as f64) < 0.05 * total_pairs as f64,
            "{} of {} egg pairs closer than the minimum",
            crowded_pairs,
            total_pairs
        );
    }

    #[test]
    fn test_generation_survives_a_hopelessly_crowded_canvas() {
        // A canvas far too small to honor the spacing: the retry budget
        // runs out and placement still completes.
        let mut rng = StdRng::seed_from_u64(11);
        let prizes = full_pool(&mut rng);
        let config = SceneConfig {
            page_height: 300.0,
            viewport_width: 300.0,
            decor_count: 10,
            ..SceneConfig::default()
        };
        let scene = generate(&mut rng, &config, &prizes);
        assert_eq!(
            scene.iter().filter(|e| e.is_egg()).count(),
            prizes.len()
        );
    }

    #[test]
    fn test_egg_placement_bounds_and_opacity() {
        let config = SceneConfig::default();
        let scene = generate_seeded(4);
        for element in scene.iter().filter(|e| e.is_egg()) {
            let p = &element.placement;
            assert!(p.left >= config.egg_inset);
            assert!(p.left <= config.viewport_width - config.egg_inset);
            assert!(p.top >= 0.0 && p.top < config.page_height);
            assert_eq!(p.opacity, 1.0);
        }
    }

    #[test]
    fn test_sampled_ranges() {
        let scene = generate_seeded(5);
        for element in &scene {
            let p = &element.placement;
            assert!(p.size >= 5.0 && p.size < 65.0);
            assert!(p.rotation >= 0.0 && p.rotation < 360.0);
            assert!(p.scale >= 0.2 && p.scale < 2.7);
            assert!(p.opacity >= 0.8 && p.opacity <= 1.0);

            let m = &element.motion;
            assert!(m.duration_secs >= 3.0 && m.duration_secs < 10.0);
            assert!(m.delay_secs >= -5.0 && m.delay_secs < 0.0);
            assert!(m.move_range >= 20.0 && m.move_range < 60.0);
            assert!(m.rotate_range >= 10.0 && m.rotate_range < 30.0);
        }
    }

    #[test]
    fn test_generation_is_reproducible_for_a_seed() {
        assert_eq!(generate_seeded(6), generate_seeded(6));
    }

    #[test]
    fn test_every_decor_kind_shows_up() {
        let scene = generate_seeded(8);
        let kinds: HashSet<_> = scene
            .iter()
            .filter_map(|e| match &e.kind {
                ElementKind::Decor(kind) => Some(*kind),
                ElementKind::Egg(_) => None,
            })
            .collect();
        // 3000 draws across seven bands; every category is expected.
        assert_eq!(kinds.len(), 7);
    }
}
