use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::SPOILED_MESSAGE;

/// How rare a discount is. Purely cosmetic, shown nowhere yet but carried
/// on every catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// Rendered footprint of the egg hiding the prize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EggSize {
    Tiny,
    Small,
    Medium,
}

/// One outcome hidden inside an egg. Winning entries carry a discount
/// code; spoiled entries carry none and only show the consolation line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prize {
    pub code: Option<String>,
    pub value: String,
    pub rarity: Rarity,
    pub size: EggSize,
}

impl Prize {
    pub fn discount(code: &str, value: &str, rarity: Rarity, size: EggSize) -> Self {
        Self {
            code: Some(code.to_string()),
            value: value.to_string(),
            rarity,
            size,
        }
    }

    pub fn spoiled(size: EggSize) -> Self {
        Self {
            code: None,
            value: SPOILED_MESSAGE.to_string(),
            rarity: Rarity::Common,
            size,
        }
    }

    pub fn is_spoiled(&self) -> bool {
        self.code.is_none()
    }
}

/// The fixed winning catalog. Codes are pairwise distinct.
pub static DISCOUNTS: Lazy<Vec<Prize>> = Lazy::new(|| {
    vec![
        Prize::discount(
            "POTTERY5",
            "$5 off pottery wheel class",
            Rarity::Common,
            EggSize::Medium,
        ),
        Prize::discount(
            "MUG10",
            "$10 off the perfect mug",
            Rarity::Common,
            EggSize::Medium,
        ),
        Prize::discount("GLAZE60", "60% off glazing", Rarity::Rare, EggSize::Small),
        Prize::discount(
            "WHEEL10",
            "$10 off pottery wheel class",
            Rarity::Common,
            EggSize::Medium,
        ),
        Prize::discount(
            "CLASS25",
            "25% off any class",
            Rarity::Uncommon,
            EggSize::Small,
        ),
        Prize::discount(
            "CLASS10",
            "10% off any class",
            Rarity::Common,
            EggSize::Medium,
        ),
        Prize::discount("FREEGLAZE", "Free Glazing", Rarity::Legendary, EggSize::Tiny),
    ]
});

/// Non-winning filler diluting the odds. Sizes are coin-flipped between
/// medium and small, like the real pool.
pub fn spoiled_pool<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Prize> {
    (0..count)
        .map(|_| {
            let size = if rng.gen_bool(0.5) {
                EggSize::Medium
            } else {
                EggSize::Small
            };
            Prize::spoiled(size)
        })
        .collect()
}
